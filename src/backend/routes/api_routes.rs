/**
 * API Routes
 *
 * ## Public
 * - `POST /users` - Register a user
 * - `POST /users/login` - Exchange credentials for a token
 *
 * ## Protected (Bearer token)
 * - `GET /users/validate` - Echo the token claims
 * - `GET /users/profile` - Fetch the caller's record
 * - `PUT /users/profile` - Overwrite the caller's record
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login, register, update_profile, validate};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes are wrapped with [`auth_middleware`] through
/// `route_layer`, so a bad token is rejected before the handler runs while
/// unknown paths still fall through to the 404 fallback.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/validate", get(validate))
        .route("/users/profile", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/users", post(register))
        .route("/users/login", post(login))
        .merge(protected)
}
