//! cfprops - property bag and validator for `CREATE TABLE ... WITH` statements
//!
//! Raw `key = value` pairs are classified into general properties,
//! compaction-strategy options and compression parameters, validated against
//! a fixed keyword allow-list and compaction threshold rules, and read back
//! through typed accessors.

pub mod cli;
pub mod config;
pub mod observability;
pub mod properties;
pub mod types;
