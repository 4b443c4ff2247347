//! Backend Module
//!
//! Server-side code of the accounts service: an Axum HTTP server in front of
//! a SQLite user store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential hashing, tokens, user store, account service, handlers
//! - **`middleware`** - Bearer-token gate for protected routes
//! - **`error`** - Backend error taxonomy and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `accounts-server` binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Every fallible handler returns `Result<_, BackendError>`. Lower-level
//! errors (`UserStoreError`, `TokenError`, `sqlx::Error`, `SharedError`)
//! convert into it with `?`, and it renders as a JSON body with the
//! matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;


pub use error::BackendError;
pub use server::{create_app, AppState};
