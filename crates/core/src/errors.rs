//! Core error types for the warranty vault engine.
//!
//! Storage is an external collaborator, so nothing here wraps a database or
//! IO error. Everything a caller can hit is either a validation problem with
//! user input, a lookup that failed, or an arithmetic guard tripping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the vault engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Category operation failed: {0}")]
    Category(#[from] CategoryError),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Valuation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Failed to read stored records: {0}")]
    Storage(String),
}

/// A single failed field check, reported back to the form that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{}", join_field_errors(.0))]
    Fields(Vec<FieldError>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ValidationError {
    /// Field errors carried by this error, empty for the non-field variants.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::Fields(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by custom category lifecycle operations.
#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("Custom category not found: {0}")]
    NotFound(String),

    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    #[error("Custom category id '{0}' is already in use")]
    DuplicateId(String),

    #[error("Unknown category key: '{0}'")]
    UnknownKey(String),
}

/// Errors that occur while valuing a single item.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Purchase date {purchase_date} is after the valuation date {today}")]
    FuturePurchaseDate {
        purchase_date: NaiveDate,
        today: NaiveDate,
    },

    #[error("Warranty expiry for purchase on {0} is out of the supported date range")]
    ExpiryOutOfRange(NaiveDate),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<Vec<FieldError>> for Error {
    fn from(errors: Vec<FieldError>) -> Self {
        Error::Validation(ValidationError::Fields(errors))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_display_joined() {
        let err = Error::from(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("price", "Price must be greater than 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "Input validation failed: name: Name is required; price: Price must be greater than 0"
        );
    }

    #[test]
    fn test_field_errors_accessor() {
        let err = ValidationError::Fields(vec![FieldError::new("name", "too short")]);
        assert_eq!(err.field_errors().len(), 1);
        assert!(ValidationError::InvalidInput("x".to_string())
            .field_errors()
            .is_empty());
    }
}
