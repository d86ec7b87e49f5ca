//! Custom error types for family-expense
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::category::CategoryValidationError;
use crate::models::expense::ExpenseValidationError;
use crate::models::period::PeriodParseError;

/// The main error type for family-expense operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for inputs and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors reading the expense store snapshot
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document backend failures
    #[error("Render error: {0}")]
    Render(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a validation error for a malformed target month
    pub fn invalid_month(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid month: {}. Use YYYY-MM (e.g., 2025-03)",
            input.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<PeriodParseError> for ExpenseError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryValidationError> for ExpenseError {
    fn from(err: CategoryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ExpenseValidationError> for ExpenseError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for family-expense operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
