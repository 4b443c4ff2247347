/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /users/login.
 *
 * # Authentication Process
 *
 * 1. Look up the live user by username
 * 2. Verify the password using bcrypt
 * 3. Issue an access token
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body malformed, fields missing, or `"Password False!"`
/// * `404 Not Found` - unknown or deleted username
///
/// # Example Request
///
/// ```http
/// POST /users/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "secret123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(accounts): State<AccountService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let request = json_body(payload)?;
    let response = accounts.login(request).await?;
    Ok(Json(response))
}
