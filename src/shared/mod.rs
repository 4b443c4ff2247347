//! Shared Module
//!
//! Types that do not depend on the HTTP server: process configuration and
//! the input-error type used when decoding and validating requests.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
