//! Custom error types for FinFlow
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::budget::BudgetValidationError;
use crate::models::category::CategoryParseError;
use crate::models::money::MoneyParseError;
use crate::models::transaction::TransactionValidationError;

/// The main error type for FinFlow operations
#[derive(Error, Debug)]
pub enum FinflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinflowError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<TransactionValidationError> for FinflowError {
    fn from(err: TransactionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BudgetValidationError> for FinflowError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<MoneyParseError> for FinflowError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryParseError> for FinflowError {
    fn from(err: CategoryParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for FinFlow operations
pub type FinflowResult<T> = Result<T, FinflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinflowError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinflowError::budget_not_found("Travel");
        assert_eq!(err.to_string(), "Budget not found: Travel");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let finflow_err: FinflowError = io_err.into();
        assert!(matches!(finflow_err, FinflowError::Io(_)));
    }

    #[test]
    fn test_from_validation_errors() {
        let err: FinflowError = TransactionValidationError::EmptyDescription.into();
        assert!(err.is_validation());

        let err: FinflowError = MoneyParseError::InvalidFormat("abc".into()).into();
        assert_eq!(err.to_string(), "Validation error: Invalid money format: abc");
    }
}
