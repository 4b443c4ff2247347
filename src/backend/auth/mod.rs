//! Authentication Module
//!
//! This module handles user registration, login, token management and
//! profile maintenance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuing and verification
//! ├── users.rs        - User model and database operations
//! ├── service.rs      - Account service orchestrating the above
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → user stored → token returned
//! 2. **Login**: username + password → hash verified → token returned
//! 3. **Profile**: token → verified by middleware → user record returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 14 by default)
//! - Tokens are HS256 JWTs issued by `"evermos"` and expire after one hour
//! - The password hash never leaves the server

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// Account service
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, UserRequest, UserResponse};
pub use handlers::{get_profile, login, register, update_profile, validate};
pub use password::PasswordHasher;
pub use service::AccountService;
pub use sessions::{Claims, TokenError, TokenIssuer};
pub use users::{User, UserStore, UserStoreError};
