//! CLI command implementations
//!
//! Every command writes exactly one JSON response to stdout. Rejected
//! property sets are reported as error responses, not process failures.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::ValidatorConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::properties::{Keywords, PropertyDefinitions, PropertyResult, TableOptions};

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_request, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate { config } => validate(config.as_deref()),
        Command::ResolveType { name } => resolve_type(&name),
        Command::Keywords => keywords(),
    }
}

/// Validate a property set read from stdin
pub fn validate(config_path: Option<&Path>) -> CliResult<()> {
    let config = match config_path {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };

    let pairs = read_request()?;

    match validate_properties(pairs, &config) {
        Ok(options) => write_response(serde_json::to_value(&options)?),
        Err(e) => write_error(e.code(), e.message()),
    }
}

/// Build, validate and read a property set.
pub fn validate_properties(
    pairs: Vec<(String, String)>,
    config: &ValidatorConfig,
) -> PropertyResult<TableOptions> {
    let count = pairs.len().to_string();
    log_event_with_fields(Event::PropertiesReceived, &[("count", count.as_str())]);

    let mut defs = PropertyDefinitions::with_config(config);
    defs.add_all(pairs);

    let result = defs
        .validate_with(Keywords::builtin(), config)
        .and_then(|()| TableOptions::from_definitions(&defs, config));

    match &result {
        Ok(_) => log_event_with_fields(Event::PropertiesValidated, &[("count", count.as_str())]),
        Err(e) => log_event_with_fields(
            Event::PropertiesRejected,
            &[("code", e.code()), ("reason", e.message())],
        ),
    }

    result
}

/// Resolve a column type token
pub fn resolve_type(name: &str) -> CliResult<()> {
    match PropertyDefinitions::parse_type(name) {
        Ok(data_type) => write_response(json!({
            "input": name,
            "type": data_type.class_name(),
        })),
        Err(e) => write_error(e.code(), e.message()),
    }
}

/// List accepted keywords and namespaces
pub fn keywords() -> CliResult<()> {
    write_response(keyword_listing(Keywords::builtin()))
}

fn keyword_listing(keywords: &Keywords) -> Value {
    json!({
        "keywords": keywords.allowed(),
        "namespaces": [
            crate::properties::COMPACTION_OPTIONS_PREFIX,
            crate::properties::COMPRESSION_PARAMETERS_PREFIX,
        ],
    })
}
