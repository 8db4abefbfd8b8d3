//! CLI-specific error types

use std::fmt;
use std::io;

use crate::properties::PropertyError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Request could not be read or decoded
    IoError,
    /// Properties or configuration rejected
    InvalidConfiguration,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "AERO_CLI_IO_ERROR",
            Self::InvalidConfiguration => crate::properties::INVALID_CONFIGURATION_CODE,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidConfiguration, msg)
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<PropertyError> for CliError {
    fn from(e: PropertyError) -> Self {
        Self::invalid_configuration(e.message())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
