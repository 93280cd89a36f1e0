//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Budget input was unparseable or outside the accepted range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense input had an empty title or an invalid amount
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (bad budget or expense input)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidExpense(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::InvalidAmount("value cannot be negative".into());
        assert_eq!(err.to_string(), "Invalid amount: value cannot be negative");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::expense_not_found("#7");
        assert_eq!(err.to_string(), "Expense not found: #7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors() {
        assert!(TrackerError::InvalidAmount("x".into()).is_validation());
        assert!(TrackerError::InvalidExpense("x".into()).is_validation());
        assert!(!TrackerError::Config("x".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
