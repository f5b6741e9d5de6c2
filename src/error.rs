//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The amount entered by the user is not a number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// A required form field was left empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A persisted row could not be read back
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Summing the stored amounts exceeded the range of `f64`
    #[error("Total of category '{0}' is too large to report")]
    AmountOverflow(String),
}

impl ExpenseError {
    /// Check if this error came from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::MissingField(_))
    }

    /// Short message shown to the user when an add is rejected
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidAmount(_) => "Invalid amount".to_string(),
            Self::MissingField(_) => "All fields are required".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_malformed_record_display() {
        let err = ExpenseError::MalformedRecord {
            line: 4,
            reason: "expected 3 fields, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record on line 4: expected 3 fields, found 2"
        );
    }

    #[test]
    fn test_amount_overflow_display() {
        let err = ExpenseError::AmountOverflow("Food".into());
        assert_eq!(err.to_string(), "Total of category 'Food' is too large to report");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors() {
        assert!(ExpenseError::InvalidAmount("abc".into()).is_validation());
        assert!(ExpenseError::MissingField("Date").is_validation());
        assert!(!ExpenseError::Io("disk".into()).is_validation());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ExpenseError::InvalidAmount("abc".into()).user_message(),
            "Invalid amount"
        );
        assert_eq!(
            ExpenseError::MissingField("Amount").user_message(),
            "All fields are required"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
