/**
 * Server Initialization
 *
 * Builds the application from an [`AppConfig`]:
 * 1. Open the database and run migrations
 * 2. Construct the user store, hasher and token issuer
 * 3. Assemble the account service and application state
 * 4. Create the router
 */

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing accounts server");

    let pool = load_database(config).await?;

    let tokens = TokenIssuer::new(&config.jwt_secret);
    let accounts = AccountService::new(
        UserStore::new(pool),
        PasswordHasher::new(config.bcrypt_cost),
        tokens.clone(),
    );
    tracing::info!("Account service ready (bcrypt cost {})", config.bcrypt_cost);

    let app = create_router(AppState::new(accounts, tokens));
    tracing::info!("Router configured");

    Ok(app)
}
