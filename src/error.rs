//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenseFormErrors;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The expense form was rejected; carries every failing field
    #[error("Validation error: {0}")]
    Validation(ExpenseFormErrors),

    /// Unparseable command-line input (dates, months, amounts)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ExpenseFormErrors> for SpendError {
    fn from(errors: ExpenseFormErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for spendlog operations
pub type SpendResult<T> = Result<T, SpendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SpendError::expense_not_found("1709251200000");
        assert_eq!(err.to_string(), "Expense not found: 1709251200000");
        assert!(matches!(err, SpendError::NotFound { .. }));
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let errors = ExpenseFormErrors {
            description: Some("Description is required.".into()),
            amount: Some("Amount must be greater than 0.".into()),
            ..Default::default()
        };
        let err = SpendError::from(errors);
        assert!(matches!(err, SpendError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: Description is required. Amount must be greater than 0."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendError = io_err.into();
        assert!(matches!(err, SpendError::Io(_)));
    }
}
