//! Authentication test helpers
//!
//! Builds test servers and drives the register and login endpoints.

use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use user_accounts::backend::auth::{AccountService, PasswordHasher, TokenIssuer, UserStore};
use user_accounts::backend::routes::create_router;
use user_accounts::backend::server::{create_app, AppState};

use super::database::{create_test_pool, test_config, TEST_SECRET};

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Create a test server over a fresh in-memory database
pub async fn create_test_server() -> TestServer {
    let app = create_app(&test_config())
        .await
        .expect("Failed to create app");
    TestServer::new(app).expect("Failed to start test server")
}

/// Create a test server and keep a handle on its database
pub async fn create_test_server_with_pool() -> (TestServer, SqlitePool) {
    let pool = create_test_pool().await;
    let tokens = TokenIssuer::new(TEST_SECRET);
    let accounts = AccountService::new(
        UserStore::new(pool.clone()),
        PasswordHasher::new(4),
        tokens.clone(),
    );
    let app = create_router(AppState::new(accounts, tokens));
    (TestServer::new(app).expect("Failed to start test server"), pool)
}

/// Register a user through the API
pub async fn register_user(server: &TestServer, username: &str, password: &str) -> TestUser {
    let response = server
        .post("/users")
        .json(&json!({
            "username": username,
            "name": format!("{} test", username),
            "password": password,
            "role": "user"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    TestUser {
        id: body["id"].as_str().expect("id in response").to_string(),
        username: username.to_string(),
        password: password.to_string(),
        token: body["accessToken"]
            .as_str()
            .expect("accessToken in response")
            .to_string(),
    }
}

/// Log in through the API and return the access token
pub async fn login_token(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/users/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["accessToken"]
        .as_str()
        .expect("accessToken in response")
        .to_string()
}
