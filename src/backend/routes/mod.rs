//! Route Configuration Module
//!
//! - **`router`** - Main router creation, tracing and fallback
//! - **`api_routes`** - Account endpoints and the protected group
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | `POST` | `/users` | - |
//! | `POST` | `/users/login` | - |
//! | `GET` | `/users/validate` | Bearer |
//! | `GET` | `/users/profile` | Bearer |
//! | `PUT` | `/users/profile` | Bearer |

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
