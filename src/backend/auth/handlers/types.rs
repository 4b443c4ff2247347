/**
 * Account Handler Types
 *
 * Request and response bodies of the `/users` endpoints. Missing request
 * fields decode as empty strings so that they are reported by validation
 * with the offending field name.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::backend::auth::users::User;
use crate::shared::SharedError;

/// Registration and profile update request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UserRequest {
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Free-form role
    pub role: String,
}

impl UserRequest {
    /// Check required fields
    pub fn validate(&self) -> Result<(), SharedError> {
        require_username(&self.username)?;
        require_password(&self.password)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plaintext password, checked against the stored hash
    pub password: String,
}

impl LoginRequest {
    /// Check required fields
    pub fn validate(&self) -> Result<(), SharedError> {
        require_username(&self.username)?;
        require_password(&self.password)
    }
}

fn require_username(username: &str) -> Result<(), SharedError> {
    if username.trim().is_empty() {
        return Err(SharedError::validation("username", "is required"));
    }
    Ok(())
}

fn require_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        return Err(SharedError::validation("password", "is required"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed access token, valid for one hour
    pub access_token: String,
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: String,
    /// Token issued with this response; empty when none was issued
    pub access_token: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
            access_token: user.access_token,
            created_at: user.created_at,
            created_by: user.created_by,
            updated_at: user.updated_at,
            updated_by: user.updated_by,
            deleted_at: user.deleted_at,
            deleted_by: user.deleted_by,
        }
    }
}
