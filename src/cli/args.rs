//! CLI argument definitions using clap
//!
//! Commands:
//! - cfprops validate [--config <path>]
//! - cfprops resolve-type <name>
//! - cfprops keywords

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cfprops - validate CREATE TABLE property sets
#[derive(Parser, Debug)]
#[command(name = "cfprops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON object of properties read from stdin
    Validate {
        /// Path to validator configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve a column type token
    ResolveType {
        /// Short CQL name (`int`) or canonical type identifier
        name: String,
    },

    /// List accepted property keywords
    Keywords,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
