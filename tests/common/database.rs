//! Database test fixtures and utilities
//!
//! Every fixture opens its own database so tests never share rows.

use std::path::Path;

use sqlx::SqlitePool;
use user_accounts::backend::server::config::load_database;
use user_accounts::shared::AppConfig;

/// Secret shared by test servers and test token issuers
pub const TEST_SECRET: &str = "integration-secret";

/// Configuration for an in-memory database with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Configuration for a database file inside `dir`
pub fn file_config(dir: &Path) -> AppConfig {
    AppConfig::builder()
        .database_url(format!("sqlite://{}", dir.join("accounts.db").display()))
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    load_database(&test_config())
        .await
        .expect("Failed to create test database pool")
}
