//! Type registry errors

use thiserror::Error;

/// Result type for type resolution
pub type TypeResult<T> = Result<T, TypeParseError>;

/// Failure to resolve a type identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    /// Identifier is well formed but names no known type
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    /// Identifier cannot be parsed
    #[error("Malformed type '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

impl TypeParseError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        TypeParseError::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
