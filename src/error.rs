//! Custom error types for seapay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The pay engine itself never errors —
//! missing lookups resolve to documented fallbacks — so these variants cover
//! the layers around it (storage, configuration, CLI input).

use thiserror::Error;

/// The main error type for seapay operations
#[derive(Error, Debug)]
pub enum SeapayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SeapayError {
    /// Create a "not found" error for allotments
    pub fn allotment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Allotment",
            identifier: identifier.into(),
        }
    }

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

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SeapayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SeapayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for seapay operations
pub type SeapayResult<T> = Result<T, SeapayError>;
