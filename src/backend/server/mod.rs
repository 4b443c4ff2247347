//! Server Module
//!
//! Initialization and shared state of the Axum HTTP server.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Database pool creation and migrations
//! - **`init`** - Wiring everything into a router
//!
//! # Example
//!
//! ```rust,no_run
//! use user_accounts::backend::server::create_app;
//! use user_accounts::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
