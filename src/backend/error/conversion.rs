/**
 * Error Conversion
 *
 * Conversions into and out of `BackendError`:
 * - lower-level store and token errors are folded into the taxonomy so that
 *   services can use `?`
 * - `BackendError` renders itself as an HTTP response
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::UserStoreError;
use crate::backend::error::types::BackendError;

impl From<UserStoreError> for BackendError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::Conflict(message) => BackendError::conflict(message),
            UserStoreError::NotFound => BackendError::not_found("User"),
            UserStoreError::Database(e) => BackendError::Database(e),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken(_) => BackendError::Unauthorized,
            TokenError::Signing(e) => BackendError::internal(format!("failed to sign token: {}", e)),
        }
    }
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// 5xx errors are logged with their full detail here; the body only
    /// carries the generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
