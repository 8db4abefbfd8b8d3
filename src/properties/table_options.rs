//! Table options built from validated properties
//!
//! This is the view the table-metadata builder consumes: every recognized
//! keyword read through the typed accessors, with table defaults applied.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::definitions::PropertyDefinitions;
use super::errors::{PropertyError, PropertyResult};
use super::keywords::{
    CHUNK_LENGTH_KB, KW_BF_FP_CHANCE, KW_CACHING, KW_COMMENT, KW_COMPACTION_STRATEGY_CLASS,
    KW_DCLOCAL_READ_REPAIR_CHANCE, KW_GC_GRACE_SECONDS, KW_MAX_COMPACTION_THRESHOLD,
    KW_MIN_COMPACTION_THRESHOLD, KW_READ_REPAIR_CHANCE, KW_REPLICATE_ON_WRITE,
};
use crate::config::ValidatorConfig;

pub const DEFAULT_READ_REPAIR_CHANCE: f64 = 0.1;
pub const DEFAULT_DCLOCAL_READ_REPAIR_CHANCE: f64 = 0.0;
/// Ten days
pub const DEFAULT_GC_GRACE_SECONDS: i32 = 864_000;
pub const DEFAULT_REPLICATE_ON_WRITE: bool = true;
pub const DEFAULT_COMPACTION_STRATEGY_CLASS: &str = "SizeTieredCompactionStrategy";
/// Package assumed for compaction strategy classes given without one
pub const COMPACTION_PACKAGE: &str = "org.apache.cassandra.db.compaction.";

/// Row/key caching mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Caching {
    All,
    #[default]
    KeysOnly,
    RowsOnly,
    None,
}

impl Caching {
    pub fn as_str(&self) -> &'static str {
        match self {
            Caching::All => "ALL",
            Caching::KeysOnly => "KEYS_ONLY",
            Caching::RowsOnly => "ROWS_ONLY",
            Caching::None => "NONE",
        }
    }

    /// Parses a caching mode, case-insensitively
    pub fn parse(value: &str) -> PropertyResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Caching::All),
            "KEYS_ONLY" => Ok(Caching::KeysOnly),
            "ROWS_ONLY" => Ok(Caching::RowsOnly),
            "NONE" => Ok(Caching::None),
            _ => Err(PropertyError::invalid(format!(
                "{} not valid for \"{}\"; expected one of ALL, KEYS_ONLY, ROWS_ONLY, NONE",
                value, KW_CACHING
            ))),
        }
    }
}

impl fmt::Display for Caching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved table options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    pub comment: String,
    pub read_repair_chance: f64,
    pub dclocal_read_repair_chance: f64,
    pub gc_grace_seconds: i32,
    pub min_compaction_threshold: i32,
    pub max_compaction_threshold: i32,
    pub replicate_on_write: bool,
    /// Fully qualified compaction strategy class
    pub compaction_strategy_class: String,
    pub caching: Caching,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom_filter_fp_chance: Option<f64>,
    pub compaction_strategy_options: BTreeMap<String, String>,
    pub compression_parameters: BTreeMap<String, String>,
}

impl TableOptions {
    /// Reads table options from a validated property set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for non-numeric values, a chance outside
    /// `[0, 1]`, an unknown caching mode, or a `chunk_length_kb` that is not a
    /// positive power of two.
    pub fn from_definitions(
        defs: &PropertyDefinitions,
        config: &ValidatorConfig,
    ) -> PropertyResult<Self> {
        let compression_parameters: BTreeMap<String, String> = defs
            .compression_parameters()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(chunk) = compression_parameters.get(CHUNK_LENGTH_KB) {
            check_chunk_length(chunk)?;
        }

        let caching = match defs.get(KW_CACHING) {
            Some(value) => Caching::parse(value)?,
            None => Caching::default(),
        };

        Ok(Self {
            comment: defs.get_string(KW_COMMENT, "").to_string(),
            read_repair_chance: read_chance(defs, KW_READ_REPAIR_CHANCE)?
                .unwrap_or(DEFAULT_READ_REPAIR_CHANCE),
            dclocal_read_repair_chance: read_chance(defs, KW_DCLOCAL_READ_REPAIR_CHANCE)?
                .unwrap_or(DEFAULT_DCLOCAL_READ_REPAIR_CHANCE),
            gc_grace_seconds: defs
                .get_int(KW_GC_GRACE_SECONDS, Some(DEFAULT_GC_GRACE_SECONDS))?
                .unwrap_or(DEFAULT_GC_GRACE_SECONDS),
            min_compaction_threshold: defs
                .get_int(
                    KW_MIN_COMPACTION_THRESHOLD,
                    Some(config.default_min_compaction_threshold),
                )?
                .unwrap_or(config.default_min_compaction_threshold),
            max_compaction_threshold: defs
                .get_int(
                    KW_MAX_COMPACTION_THRESHOLD,
                    Some(config.default_max_compaction_threshold),
                )?
                .unwrap_or(config.default_max_compaction_threshold),
            replicate_on_write: defs.get_boolean(KW_REPLICATE_ON_WRITE, DEFAULT_REPLICATE_ON_WRITE),
            compaction_strategy_class: qualify_compaction_class(
                defs.get_string(KW_COMPACTION_STRATEGY_CLASS, DEFAULT_COMPACTION_STRATEGY_CLASS),
            ),
            caching,
            bloom_filter_fp_chance: read_chance(defs, KW_BF_FP_CHANCE)?,
            compaction_strategy_options: defs
                .compaction_strategy_options()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            compression_parameters,
        })
    }
}

/// Short class names live in the compaction package
fn qualify_compaction_class(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{}{}", COMPACTION_PACKAGE, name)
    }
}

/// Reads an optional probability; NaN and infinities never fall in range.
fn read_chance(defs: &PropertyDefinitions, key: &str) -> PropertyResult<Option<f64>> {
    let Some(chance) = defs.get_double(key, None)? else {
        return Ok(None);
    };
    if !(0.0..=1.0).contains(&chance) {
        return Err(PropertyError::invalid(format!(
            "{} not valid for \"{}\"; must be between 0 and 1",
            defs.get_string(key, ""),
            key
        )));
    }
    Ok(Some(chance))
}

fn check_chunk_length(value: &str) -> PropertyResult<()> {
    let invalid = || {
        PropertyError::invalid(format!(
            "{} not valid for \"{}\"; must be a positive power of 2",
            value, CHUNK_LENGTH_KB
        ))
    };

    let kb: i32 = value.parse().map_err(|_| invalid())?;
    if kb <= 0 || (kb & (kb - 1)) != 0 {
        return Err(invalid());
    }
    Ok(())
}
