/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the accounts server. Every
 * handler returns `Result<_, BackendError>`, and each variant maps to exactly
 * one HTTP status.
 *
 * # Error Categories
 *
 * - `BadRequest` - malformed input, validation failure, wrong password (400)
 * - `Unauthorized` - missing or invalid bearer token (401)
 * - `NotFound` - unknown or soft-deleted user, unknown route (404)
 * - `Conflict` - duplicate id or username (409)
 * - `Internal` - hashing, signing or unexpected store failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned to clients for any 500 response
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use user_accounts::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::bad_request("Password False!");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("User");
/// assert_eq!(err.message(), "User not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request was understood but its content is unacceptable
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// No valid bearer token accompanied a protected request
    #[error("Unauthorized")]
    Unauthorized,

    /// The addressed entity does not exist (or is soft-deleted)
    #[error("{entity} not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
    },

    /// A uniqueness rule of the user store was violated
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Failure on the server side that the client cannot fix
    #[error("Internal error: {message}")]
    Internal {
        /// Diagnostic message, logged but not returned to clients
        message: String,
    },

    /// Decoding or validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error not covered by a more specific variant
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migrations failed to apply at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not found error for the given entity kind
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest`, `SharedError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Internal`, `Database`, `Migration` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } | Self::Database(_) | Self::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side failures collapse to a generic message so database and
    /// signing details never reach the response body.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message } | Self::Conflict { message } => message.clone(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::NotFound { .. } => self.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Internal { .. } | Self::Database(_) | Self::Migration(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}
