//! CLI module for cfprops
//!
//! Provides command-line interface for:
//! - validate: Validate a property set from stdin
//! - resolve-type: Resolve a column type token
//! - keywords: List accepted keywords

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{keywords, resolve_type, run, run_command, validate, validate_properties};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_request, read_request, write_error, write_response};
