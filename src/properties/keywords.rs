//! Static keyword tables for table-definition properties
//!
//! These tables are built once on first use and never mutated afterwards,
//! so they can be read from any thread without synchronization.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub const KW_COMMENT: &str = "comment";
pub const KW_READ_REPAIR_CHANCE: &str = "read_repair_chance";
pub const KW_DCLOCAL_READ_REPAIR_CHANCE: &str = "dclocal_read_repair_chance";
pub const KW_GC_GRACE_SECONDS: &str = "gc_grace_seconds";
pub const KW_MIN_COMPACTION_THRESHOLD: &str = "min_compaction_threshold";
pub const KW_MAX_COMPACTION_THRESHOLD: &str = "max_compaction_threshold";
pub const KW_REPLICATE_ON_WRITE: &str = "replicate_on_write";
pub const KW_COMPACTION_STRATEGY_CLASS: &str = "compaction_strategy_class";
pub const KW_CACHING: &str = "caching";
pub const KW_BF_FP_CHANCE: &str = "bloom_filter_fp_chance";

/// Namespace for options handed to the compaction strategy
pub const COMPACTION_OPTIONS_PREFIX: &str = "compaction_strategy_options";
/// Namespace for options handed to the compression codec
pub const COMPRESSION_PARAMETERS_PREFIX: &str = "compression_parameters";
/// Separator between a namespace and the option name
pub const NAMESPACE_SEPARATOR: char = ':';

/// Compression parameter naming the codec class
pub const SSTABLE_COMPRESSION: &str = "sstable_compression";
/// Compression parameter for the chunk length in kilobytes
pub const CHUNK_LENGTH_KB: &str = "chunk_length_kb";
/// Codec used when the statement does not name one
pub const DEFAULT_COMPRESSION_CLASS: &str = "org.apache.cassandra.io.compress.SnappyCompressor";

pub const DEFAULT_MIN_COMPACTION_THRESHOLD: i32 = 4;
pub const DEFAULT_MAX_COMPACTION_THRESHOLD: i32 = 32;

const RECOGNIZED: &[&str] = &[
    KW_COMMENT,
    KW_READ_REPAIR_CHANCE,
    KW_DCLOCAL_READ_REPAIR_CHANCE,
    KW_GC_GRACE_SECONDS,
    KW_MIN_COMPACTION_THRESHOLD,
    KW_MAX_COMPACTION_THRESHOLD,
    KW_REPLICATE_ON_WRITE,
    KW_COMPACTION_STRATEGY_CLASS,
    KW_CACHING,
    KW_BF_FP_CHANCE,
];

const OBSOLETE: &[&str] = &[];

const TYPE_ALIASES: &[(&str, &str)] = &[
    ("ascii", "AsciiType"),
    ("bigint", "LongType"),
    ("blob", "BytesType"),
    ("boolean", "BooleanType"),
    ("counter", "CounterColumnType"),
    ("decimal", "DecimalType"),
    ("double", "DoubleType"),
    ("float", "FloatType"),
    ("int", "Int32Type"),
    ("text", "UTF8Type"),
    ("timestamp", "DateType"),
    ("uuid", "UUIDType"),
    ("varchar", "UTF8Type"),
    ("varint", "IntegerType"),
];

static BUILTIN_KEYWORDS: OnceLock<Keywords> = OnceLock::new();
static BUILTIN_ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Keyword allow-list used by validation.
///
/// `recognized` and `obsolete` are kept as distinct sets; `allowed` is their
/// union and is the actual acceptance gate.
#[derive(Debug, Clone)]
pub struct Keywords {
    recognized: HashSet<&'static str>,
    obsolete: HashSet<&'static str>,
    allowed: HashSet<&'static str>,
}

impl Keywords {
    /// Builds a keyword table from explicit recognized and obsolete lists
    pub fn new(recognized: &[&'static str], obsolete: &[&'static str]) -> Self {
        let recognized: HashSet<_> = recognized.iter().copied().collect();
        let obsolete: HashSet<_> = obsolete.iter().copied().collect();
        let allowed = recognized.union(&obsolete).copied().collect();

        Self {
            recognized,
            obsolete,
            allowed,
        }
    }

    /// The process-wide table of table-definition keywords
    pub fn builtin() -> &'static Keywords {
        BUILTIN_KEYWORDS.get_or_init(|| Keywords::new(RECOGNIZED, OBSOLETE))
    }

    /// Builtin recognized keywords plus the given obsolete names
    pub fn with_obsolete(obsolete: &[&'static str]) -> Self {
        let recognized: Vec<&'static str> = RECOGNIZED
            .iter()
            .copied()
            .filter(|kw| !obsolete.contains(kw))
            .collect();
        Self::new(&recognized, obsolete)
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.recognized.contains(name)
    }

    pub fn is_obsolete(&self, name: &str) -> bool {
        self.obsolete.contains(name)
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    /// Allowed keywords in sorted order
    pub fn allowed(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.allowed.iter().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Maps short CQL type names to canonical type identifiers
pub fn type_aliases() -> &'static HashMap<&'static str, &'static str> {
    BUILTIN_ALIASES.get_or_init(|| TYPE_ALIASES.iter().copied().collect())
}
