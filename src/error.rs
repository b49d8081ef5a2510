//! Custom error types for Tally
//!
//! This module defines the crate-wide error type using thiserror. Input
//! validation failures have their own type in [`crate::parser::ParseError`]
//! since they never leave the parser as errors.

use thiserror::Error;

use crate::models::EntryKind;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entry not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A total that does not fit in the money type
    #[error("{0} total is too large to compute")]
    Overflow(EntryKind),
}

impl TallyError {
    /// Create a "not found" error for an expense index
    pub fn expense_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("#{}", index),
        }
    }

    /// Create a "not found" error for an income index
    pub fn income_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: format!("#{}", index),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the error describes the user's data rather than a failure
    /// of the console or filesystem, so a session can report it and go on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Overflow(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TallyError::expense_not_found(3);
        assert_eq!(err.to_string(), "Expense not found: #3");
        assert!(err.is_not_found());

        let err = TallyError::income_not_found(1);
        assert_eq!(err.to_string(), "Income not found: #1");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
        assert!(!tally_err.is_not_found());
        assert!(!tally_err.is_recoverable());
    }

    #[test]
    fn test_overflow_error() {
        let err = TallyError::Overflow(EntryKind::Income);
        assert_eq!(err.to_string(), "Income total is too large to compute");
        assert!(err.is_recoverable());
        assert!(!err.is_not_found());
    }
}
