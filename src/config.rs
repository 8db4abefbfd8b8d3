//! Validator configuration
//!
//! Loaded from a JSON file. Every field is optional and falls back to the
//! system-wide defaults:
//!
//! ```json
//! {
//!   "default_min_compaction_threshold": 4,
//!   "default_max_compaction_threshold": 32,
//!   "default_compression_class": "org.apache.cassandra.io.compress.SnappyCompressor",
//!   "log_obsolete": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};
use crate::properties::{
    PropertyError, PropertyResult, DEFAULT_COMPRESSION_CLASS, DEFAULT_MAX_COMPACTION_THRESHOLD,
    DEFAULT_MIN_COMPACTION_THRESHOLD,
};

/// Defaults applied when validating and reading table properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Min compaction threshold assumed when a statement sets only the max
    #[serde(default = "default_min_threshold")]
    pub default_min_compaction_threshold: i32,

    /// Max compaction threshold assumed when a statement sets only the min
    #[serde(default = "default_max_threshold")]
    pub default_max_compaction_threshold: i32,

    /// Codec seeded into the compression parameters
    #[serde(default = "default_compression_class")]
    pub default_compression_class: String,

    /// Emit a warning for each obsolete property (default: true)
    #[serde(default = "default_log_obsolete")]
    pub log_obsolete: bool,
}

fn default_min_threshold() -> i32 {
    DEFAULT_MIN_COMPACTION_THRESHOLD
}
fn default_max_threshold() -> i32 {
    DEFAULT_MAX_COMPACTION_THRESHOLD
}
fn default_compression_class() -> String {
    DEFAULT_COMPRESSION_CLASS.to_string()
}
fn default_log_obsolete() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_min_compaction_threshold: default_min_threshold(),
            default_max_compaction_threshold: default_max_threshold(),
            default_compression_class: default_compression_class(),
            log_obsolete: default_log_obsolete(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> PropertyResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PropertyError::invalid(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        let config = Self::from_json(&content)?;

        let shown = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);

        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> PropertyResult<Self> {
        let config: ValidatorConfig = serde_json::from_str(content)
            .map_err(|e| PropertyError::invalid(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> PropertyResult<()> {
        if self.default_min_compaction_threshold < 0 {
            return Err(PropertyError::invalid(
                "default_min_compaction_threshold must be >= 0",
            ));
        }

        if self.default_max_compaction_threshold < self.default_min_compaction_threshold {
            return Err(PropertyError::invalid(format!(
                "default_max_compaction_threshold ({}) must be >= default_min_compaction_threshold ({})",
                self.default_max_compaction_threshold, self.default_min_compaction_threshold
            )));
        }

        if self.default_compression_class.trim().is_empty() {
            return Err(PropertyError::invalid(
                "default_compression_class must not be empty",
            ));
        }

        Ok(())
    }
}
