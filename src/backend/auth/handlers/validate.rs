/**
 * Token Validation Handler
 *
 * GET /users/validate echoes the claims of the presented token. The auth
 * middleware has already verified it by the time this handler runs.
 */

use axum::response::Json;

use crate::backend::auth::sessions::Claims;
use crate::backend::middleware::AuthUser;

/// Return the decoded claims of the caller's token
///
/// # Example Response
///
/// ```json
/// {
///   "userId": "123e4567-e89b-12d3-a456-426614174000",
///   "username": "alice",
///   "role": "user",
///   "iss": "evermos",
///   "iat": 1704067200,
///   "exp": 1704070800
/// }
/// ```
pub async fn validate(AuthUser(claims): AuthUser) -> Json<Claims> {
    Json(claims)
}
