//! User Accounts - Main Library
//!
//! A small account service built on Axum and sqlx: users register with a
//! username and password, log in to receive a signed JWT, and use that token
//! to read or update their own profile.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and input-error types
//!   - `AppConfig` loaded from the environment
//!   - `SharedError` for undecodable or invalid requests
//!
//! - **`backend`** - The HTTP server
//!   - Password hashing (bcrypt) and token issuing (jsonwebtoken)
//!   - User store over a SQLite pool with soft-delete semantics
//!   - Account service, handlers, auth middleware and routes
//!
//! # Usage
//!
//! ```rust,no_run
//! use user_accounts::backend::server::init::create_app;
//! use user_accounts::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every fallible handler returns `Result<_, BackendError>`. The error knows
//! its HTTP status and renders as `{"error": ..., "status": ...}`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
