//! Profile API integration tests

use axum::http::StatusCode;
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use user_accounts::backend::auth::UserStore;
use uuid::Uuid;

use crate::common::assertions::{assert_error, assert_error_status};
use crate::common::{create_test_server, create_test_server_with_pool, login_token, register_user};

#[tokio::test]
async fn test_register_login_profile_flow() {
    let server = create_test_server().await;
    let user = register_user(&server, "alice", "secret123").await;
    let token = login_token(&server, "alice", "secret123").await;

    let response = server
        .get("/users/profile")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["id"].as_str(), Some(user.id.as_str()));
    assert_eq!(profile["username"], "alice");
    assert_eq!(profile["name"], "alice test");
    assert_eq!(profile["accessToken"], "");
    assert!(profile.get("password").is_none());
}

#[tokio::test]
async fn test_profile_without_token() {
    let server = create_test_server().await;

    let response = server.get("/users/profile").await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_update_profile() {
    let server = create_test_server().await;
    let user = register_user(&server, "alice", "secret123").await;

    let response = server
        .put("/users/profile")
        .authorization_bearer(&user.token)
        .json(&json!({
            "username": "liddell",
            "name": "Alice Liddell",
            "password": "n3w-secret",
            "role": "editor"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["username"], "liddell");
    assert_eq!(body["name"], "Alice Liddell");
    assert_eq!(body["role"], "editor");
    assert_eq!(body["updatedBy"].as_str(), Some(user.id.as_str()));
    assert!(body["updatedAt"].is_string());

    // the returned token carries the new identity
    let fresh = body["accessToken"].as_str().unwrap().to_string();
    let claims: Value = server
        .get("/users/validate")
        .authorization_bearer(&fresh)
        .await
        .json();
    assert_eq!(claims["username"], "liddell");
    assert_eq!(claims["role"], "editor");

    // old password no longer works, the new one does
    let response = server
        .post("/users/login")
        .json(&json!({ "username": "liddell", "password": "secret123" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Password False!");
    login_token(&server, "liddell", "n3w-secret").await;
}

#[tokio::test]
async fn test_update_profile_to_taken_username() {
    let server = create_test_server().await;
    let alice = register_user(&server, "alice", "secret123").await;
    register_user(&server, "bob", "secret456").await;

    let response = server
        .put("/users/profile")
        .authorization_bearer(&alice.token)
        .json(&json!({ "username": "bob", "password": "secret123" }))
        .await;

    assert_error_status(&response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_profile_malformed_json() {
    let server = create_test_server().await;
    let alice = register_user(&server, "alice", "secret123").await;

    let response = server
        .put("/users/profile")
        .authorization_bearer(&alice.token)
        .text("not json")
        .content_type("application/json")
        .await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_soft_deleted_user_is_gone() {
    let (server, pool) = create_test_server_with_pool().await;
    let alice = register_user(&server, "alice", "secret123").await;

    let store = UserStore::new(pool);
    let mut user = store.resolve_by_username("alice").await.unwrap();
    user.soft_delete(Uuid::new_v4());
    store.update(&user).await.unwrap();
    assert!(user.deleted_at.is_some_and(|at| at <= Utc::now()));

    let response = server
        .post("/users/login")
        .json(&json!({ "username": "alice", "password": "secret123" }))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");

    let response = server
        .get("/users/profile")
        .authorization_bearer(&alice.token)
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");

    // the name is free again
    let again = register_user(&server, "alice", "another").await;
    assert_ne!(again.id, alice.id);
}
