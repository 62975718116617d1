/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::permissions::Operation;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum StoreError {
    #[error("Index {index} is out of range for length {length}")]
    #[diagnostic(
        code(store::index_out_of_range),
        help("Valid indices are 0..length. Use try_get for a non-failing read.")
    )]
    IndexOutOfRange { index: usize, length: usize },

    #[error("Key {key} was not found")]
    #[diagnostic(
        code(store::key_not_found),
        help("Check contains_key first or use try_get.")
    )]
    KeyNotFound { key: String },

    #[error("Access denied for {operation}: {reason}")]
    #[diagnostic(
        code(store::access_denied),
        help("Grant the matching permission flag or unlock the store.")
    )]
    AccessDenied { operation: Operation, reason: String },

    #[error("Cannot compare {expected} with {found}")]
    #[diagnostic(
        code(store::invalid_comparison),
        help("Only stores or slices of the same element type can be ordered against each other.")
    )]
    InvalidComparison { expected: String, found: String },

    #[error("Serialization error: {0}")]
    #[diagnostic(
        code(store::serialization_error),
        help("The element type could not be serialized.")
    )]
    Serialization(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(store::configuration_error),
        help("Review the store configuration file or JSON document.")
    )]
    Configuration(String),
}

impl StoreError {
    /// Out-of-range read
    pub fn out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Missing key, rendered through Debug
    pub fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Denied operation
    pub fn denied(operation: Operation, reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            operation,
            reason: reason.into(),
        }
    }

    /// Whether this error came from the access gate
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Configuration(err.to_string())
    }
}
