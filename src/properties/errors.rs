//! Property error types
//!
//! Every failure in this subsystem is a terminal rejection of the statement,
//! so there is a single error kind carrying a human-readable message.

use thiserror::Error;

use crate::types::TypeParseError;

/// Stable error code reported to clients
pub const INVALID_CONFIGURATION_CODE: &str = "AERO_INVALID_CONFIGURATION";

/// Result type for property operations
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Property validation and access errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The statement's properties are not an acceptable table configuration
    #[error("{0}")]
    InvalidConfiguration(String),
}

impl PropertyError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PropertyError::InvalidConfiguration(message.into())
    }

    /// Keyword outside the allow-list
    pub fn unknown_keyword(name: &str) -> Self {
        Self::invalid(format!(
            "{} is not a valid keyword argument for CREATE TABLE",
            name
        ))
    }

    /// Value that does not parse as the requested number type
    pub fn not_a_number(key: &str, value: &str) -> Self {
        Self::invalid(format!("{} not valid for \"{}\"", value, key))
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            PropertyError::InvalidConfiguration(_) => INVALID_CONFIGURATION_CODE,
        }
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        match self {
            PropertyError::InvalidConfiguration(msg) => msg,
        }
    }
}

impl From<TypeParseError> for PropertyError {
    fn from(e: TypeParseError) -> Self {
        PropertyError::InvalidConfiguration(e.to_string())
    }
}
