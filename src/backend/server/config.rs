/**
 * Database Setup
 *
 * This module opens the SQLite connection pool behind the user store and
 * brings the schema up to date.
 *
 * # In-memory databases
 *
 * Every SQLite connection to `sqlite::memory:` sees its own empty database.
 * Such pools are pinned to a single connection that is never recycled so
 * that the migrated schema stays visible to every query.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Create the connection pool and run pending migrations
///
/// Unlike optional services, the user store is required: any failure here
/// is returned and aborts startup.
///
/// # Example
///
/// ```rust,no_run
/// use user_accounts::backend::server::config::load_database;
/// use user_accounts::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::from_env()?;
/// let pool = load_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, BackendError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool_options = if is_memory_url(&config.database_url) {
        tracing::debug!("Using in-memory database");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
