//! Property bag for table-definition statements
//!
//! Ingestion never fails; every rejection is deferred to [`PropertyDefinitions::validate`].
//!
//! Keys are routed on the first `:`:
//! - `name` goes to the general properties
//! - `compaction_strategy_options:opt` goes to the compaction options as `opt`
//! - `compression_parameters:opt` goes to the compression parameters as `opt`
//! - any other `prefix:name` is kept whole as a general property, and is
//!   then rejected by the allow-list check

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::errors::{PropertyError, PropertyResult};
use super::keywords::{
    type_aliases, Keywords, COMPACTION_OPTIONS_PREFIX, COMPRESSION_PARAMETERS_PREFIX,
    KW_MAX_COMPACTION_THRESHOLD, KW_MIN_COMPACTION_THRESHOLD, NAMESPACE_SEPARATOR,
    SSTABLE_COMPRESSION,
};
use crate::config::ValidatorConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::types::{DataType, TypeParser};

/// Properties of one `CREATE TABLE ... WITH` statement.
#[derive(Debug, Clone)]
pub struct PropertyDefinitions {
    properties: HashMap<String, String>,
    compaction_strategy_options: HashMap<String, String>,
    compression_parameters: HashMap<String, String>,
}

impl Default for PropertyDefinitions {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyDefinitions {
    /// Creates an empty property set with the default codec seeded
    pub fn new() -> Self {
        Self::with_config(&ValidatorConfig::default())
    }

    /// Creates an empty property set seeded with the configured codec
    pub fn with_config(config: &ValidatorConfig) -> Self {
        let mut compression_parameters = HashMap::new();
        compression_parameters.insert(
            SSTABLE_COMPRESSION.to_string(),
            config.default_compression_class.clone(),
        );

        Self {
            properties: HashMap::new(),
            compaction_strategy_options: HashMap::new(),
            compression_parameters,
        }
    }

    /// Adds one property, routing namespaced keys to their sub-collection.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match name.split_once(NAMESPACE_SEPARATOR) {
            None => {
                self.properties.insert(name, value);
            }
            Some((COMPACTION_OPTIONS_PREFIX, option)) => {
                self.compaction_strategy_options
                    .insert(option.to_string(), value);
            }
            Some((COMPRESSION_PARAMETERS_PREFIX, option)) => {
                self.compression_parameters.insert(option.to_string(), value);
            }
            Some(_) => {
                // Unknown namespace: keep the full name as a general property
                self.properties.insert(name, value);
            }
        }
    }

    /// Adds every entry in iteration order
    pub fn add_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in entries {
            self.add_property(name, value);
        }
    }

    /// Validates against the builtin keywords and default thresholds
    pub fn validate(&self) -> PropertyResult<()> {
        self.validate_with(Keywords::builtin(), &ValidatorConfig::default())
    }

    /// Validates the property set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - a general property is not an allowed keyword
    /// - the compaction thresholds are inconsistent
    /// - a compaction threshold is not an integer
    pub fn validate_with(
        &self,
        keywords: &Keywords,
        config: &ValidatorConfig,
    ) -> PropertyResult<()> {
        // Allow-list first: typed reads below must never see an unknown key
        if let Some(bogus) = self.unknown_properties(keywords).first() {
            return Err(PropertyError::unknown_keyword(bogus));
        }

        if config.log_obsolete {
            for obsolete in self.obsolete_properties(keywords) {
                let message = format!("Ignoring obsolete property {}", obsolete);
                log_event_with_fields(
                    Event::ObsoletePropertyIgnored,
                    &[("message", message.as_str()), ("property", obsolete)],
                );
            }
        }

        self.validate_compaction_thresholds(config)
    }

    fn validate_compaction_thresholds(&self, config: &ValidatorConfig) -> PropertyResult<()> {
        let min = self.get_int(KW_MIN_COMPACTION_THRESHOLD, None)?;
        let max = self.get_int(KW_MAX_COMPACTION_THRESHOLD, None)?;

        match (min, max) {
            (Some(min), Some(max)) => {
                // max == 0 disables compaction and is exempt from ordering
                if min > max && max != 0 {
                    return Err(PropertyError::invalid(format!(
                        "{} cannot be larger than {}",
                        KW_MIN_COMPACTION_THRESHOLD, KW_MAX_COMPACTION_THRESHOLD
                    )));
                }
            }
            (Some(min), None) => {
                if min > config.default_max_compaction_threshold {
                    return Err(PropertyError::invalid(format!(
                        "{} cannot be larger than {}, (default {})",
                        KW_MIN_COMPACTION_THRESHOLD,
                        KW_MAX_COMPACTION_THRESHOLD,
                        config.default_max_compaction_threshold
                    )));
                }
            }
            (None, Some(max)) => {
                if max < config.default_min_compaction_threshold && max != 0 {
                    return Err(PropertyError::invalid(format!(
                        "{} cannot be smaller than {}, (default {})",
                        KW_MAX_COMPACTION_THRESHOLD,
                        KW_MIN_COMPACTION_THRESHOLD,
                        config.default_min_compaction_threshold
                    )));
                }
            }
            (None, None) => {}
        }

        Ok(())
    }

    /// General property names outside the allow-list, sorted
    pub fn unknown_properties(&self, keywords: &Keywords) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .properties
            .keys()
            .map(String::as_str)
            .filter(|name| !keywords.is_allowed(name))
            .collect();
        names.sort_unstable();
        names
    }

    /// General property names that are obsolete keywords, sorted
    pub fn obsolete_properties(&self, keywords: &Keywords) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .properties
            .keys()
            .map(String::as_str)
            .filter(|name| keywords.is_obsolete(name))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// True for `1`, `true` or `yes` (any case); every other value is false.
    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(value) => {
                let value = value.to_ascii_lowercase();
                matches!(value.as_str(), "1" | "true" | "yes")
            }
        }
    }

    pub fn get_int(&self, key: &str, default: Option<i32>) -> PropertyResult<Option<i32>> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .parse::<i32>()
                .map(Some)
                .map_err(|_| PropertyError::not_a_number(key, value)),
        }
    }

    pub fn get_double(&self, key: &str, default: Option<f64>) -> PropertyResult<Option<f64>> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| PropertyError::not_a_number(key, value)),
        }
    }

    /// General properties
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Raw options for the compaction strategy
    pub fn compaction_strategy_options(&self) -> &HashMap<String, String> {
        &self.compaction_strategy_options
    }

    /// Raw parameters for the compression codec; always holds the codec entry
    pub fn compression_parameters(&self) -> &HashMap<String, String> {
        &self.compression_parameters
    }

    /// Resolves a column type token against the builtin type registry
    pub fn parse_type(name: &str) -> PropertyResult<DataType> {
        Self::parse_type_with(TypeParser::builtin(), name)
    }

    /// Resolves a column type token.
    ///
    /// Short CQL names (`int`, `text`, ...) map to their canonical type;
    /// anything else is passed to the registry as-is so custom types work.
    pub fn parse_type_with(parser: &TypeParser, name: &str) -> PropertyResult<DataType> {
        let class_name = type_aliases().get(name).copied().unwrap_or(name);
        let data_type = parser.parse(class_name)?;

        let resolved = data_type.class_name();
        log_event_with_fields(
            Event::TypeResolved,
            &[("input", name), ("type", resolved.as_str())],
        );
        Ok(data_type)
    }
}

impl fmt::Display for PropertyDefinitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PropertyDefinitions({:?}, compaction: {:?}, compression: {:?})",
            sorted(&self.properties),
            sorted(&self.compaction_strategy_options),
            sorted(&self.compression_parameters)
        )
    }
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
