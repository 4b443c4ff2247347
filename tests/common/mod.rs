//! Common test utilities and helpers
//!
//! - Database fixtures (in-memory and file-backed SQLite)
//! - Test servers and authentication helpers
//! - Error-body assertions

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
