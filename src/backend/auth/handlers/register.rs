/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /users.
 *
 * # Registration Process
 *
 * 1. Decode and validate the body
 * 2. Hash the password using bcrypt
 * 3. Store the user (creator = the new user)
 * 4. Issue an access token
 * 5. Return the user with its token
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::json_body;
use crate::backend::auth::handlers::types::{UserRequest, UserResponse};
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - body malformed, username or password missing
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing, storage or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /users HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "name": "Alice",
///   "password": "secret123",
///   "role": "user"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "username": "alice",
///   "name": "Alice",
///   "role": "user",
///   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "createdBy": "123e4567-e89b-12d3-a456-426614174000"
/// }
/// ```
pub async fn register(
    State(accounts): State<AccountService>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let request = json_body(payload)?;
    let user = accounts.register(request).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
