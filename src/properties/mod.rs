//! Table-definition properties
//!
//! Classifies the raw `key = value` pairs of a `CREATE TABLE ... WITH`
//! statement, validates them, and exposes typed, defaulted accessors.
//!
//! # Rules
//!
//! - Ingestion never fails; rejection happens in `validate`
//! - Only allow-listed keywords are accepted as general properties
//! - Obsolete keywords are tolerated with a warning
//! - `min_compaction_threshold <= max_compaction_threshold` unless max is 0
//! - Compression parameters always name a codec

mod definitions;
mod errors;
mod keywords;
mod table_options;

pub use definitions::PropertyDefinitions;
pub use errors::{PropertyError, PropertyResult, INVALID_CONFIGURATION_CODE};
pub use keywords::{
    type_aliases, Keywords, CHUNK_LENGTH_KB, COMPACTION_OPTIONS_PREFIX,
    COMPRESSION_PARAMETERS_PREFIX, DEFAULT_COMPRESSION_CLASS, DEFAULT_MAX_COMPACTION_THRESHOLD,
    DEFAULT_MIN_COMPACTION_THRESHOLD, KW_BF_FP_CHANCE, KW_CACHING, KW_COMMENT,
    KW_COMPACTION_STRATEGY_CLASS, KW_DCLOCAL_READ_REPAIR_CHANCE, KW_GC_GRACE_SECONDS,
    KW_MAX_COMPACTION_THRESHOLD, KW_MIN_COMPACTION_THRESHOLD, KW_READ_REPAIR_CHANCE,
    KW_REPLICATE_ON_WRITE, NAMESPACE_SEPARATOR, SSTABLE_COMPRESSION,
};
pub use table_options::{Caching, TableOptions};
