//! Custom error types for the expense tracker
//!
//! Separates recoverable user-input problems (validation, bad positions) from
//! storage failures so callers can decide how to report each.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A field value on create/update (or a user-supplied value) is invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// A 1-based position does not refer to an existing expense
    #[error("Expense #{index} does not exist ({len} recorded)")]
    Index { index: usize, len: usize },

    /// Reading or writing the expenses file failed
    #[error("Storage error: {0}")]
    Persistence(String),

    /// Percentages were requested over expenses that total zero
    #[error("Cannot compute category percentages: expenses total zero")]
    DivisionUndefined,

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an index error for a position outside `1..=len`
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::Index { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an index error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Check if this is a storage error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Validation("Amount cannot be negative".into());
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative");
    }

    #[test]
    fn test_index_error() {
        let err = ExpenseError::index_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Expense #5 does not exist (3 recorded)");
        assert!(err.is_index());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExpenseError = io_err.into();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: ExpenseError = json_err.into();
        assert!(err.is_persistence());
    }
}
