//! Shared Error Types
//!
//! Input errors raised before a request reaches the account service: bodies
//! that cannot be decoded and fields that fail validation. Both surface to the
//! client as `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use user_accounts::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must not be empty");
//! assert_eq!(error.to_string(), "Validation error in field 'username': must not be empty");
//! ```
use thiserror::Error;

/// Input errors shared by handlers and the account service
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Request body could not be decoded
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
