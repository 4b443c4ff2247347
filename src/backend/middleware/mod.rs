//! Middleware Module
//!
//! HTTP middleware for the accounts server.
//!
//! - **`auth`** - bearer-token gate for protected routes and the `AuthUser`
//!   extractor handlers use to read the verified claims
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use user_accounts::backend::auth::TokenIssuer;
//! use user_accounts::backend::middleware::{auth_middleware, AuthUser};
//!
//! let tokens = TokenIssuer::new("secret");
//! let router: Router = Router::new()
//!     .route("/me", get(|AuthUser(claims): AuthUser| async move { claims.username }))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
