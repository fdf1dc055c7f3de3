//! Custom error types for contas-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contas-cli operations
#[derive(Error, Debug)]
pub enum ContasError {
    /// Bad numeric or enum input; shells recover by re-prompting
    #[error("Parse error: {0}")]
    Parse(String),

    /// An existing data file could not be read or contained a malformed row
    #[error("Load error: {0}")]
    Load(String),

    /// Persistence failed; the record may be in memory but is not durable
    #[error("Write error: {0}")]
    Write(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// SQLite errors
    #[error("Database error: {0}")]
    Db(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ContasError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for ContasError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(err.to_string())
    }
}

/// Result type alias for contas-cli operations
pub type ContasResult<T> = Result<T, ContasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContasError::Parse("not a number".into());
        assert_eq!(err.to_string(), "Parse error: not a number");
    }

    #[test]
    fn test_not_found_error() {
        let err = ContasError::transaction_not_found("42");
        assert_eq!(err.to_string(), "Transaction not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContasError = io_err.into();
        assert!(matches!(err, ContasError::Io(_)));
    }
}
