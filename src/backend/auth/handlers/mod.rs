//! Account Handlers Module
//!
//! HTTP handlers for the `/users` endpoints. Each handler decodes its input,
//! calls the [`AccountService`](crate::backend::auth::service::AccountService)
//! and shapes the response.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and body decoding
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /users
//! ├── login.rs     - POST /users/login
//! ├── validate.rs  - GET /users/validate
//! └── profile.rs   - GET and PUT /users/profile
//! ```
//!
//! # Authentication
//!
//! `register` and `login` are public. The other handlers sit behind the auth
//! middleware and take the verified claims as an
//! [`AuthUser`](crate::backend::middleware::AuthUser) parameter.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Token validation handler
pub mod validate;

/// Profile handlers
pub mod profile;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, UserRequest, UserResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
pub use validate::validate;
pub use profile::{get_profile, update_profile};

/// Unwrap a JSON body, turning axum's rejection into a `400` error
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            Err(SharedError::serialization(rejection.body_text()).into())
        }
    }
}
