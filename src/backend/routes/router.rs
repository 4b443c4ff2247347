/**
 * Router Configuration
 *
 * Combines the API routes, the request tracing layer and a JSON 404
 * fallback into a single Axum router.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Unknown paths answer `404` with the usual error body:
///
/// ```json
/// { "error": "Route not found", "status": 404 }
/// ```
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(|| async { BackendError::not_found("Route") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
