/**
 * Session Tokens
 *
 * This module issues and verifies the signed access tokens handed out at
 * registration and login. Tokens are HS256 JWTs, valid for one hour, and
 * carry the user's id, username and role.
 */

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Value of the `iss` claim on every token
pub const ISSUER: &str = "evermos";

/// Lifetime of an access token in seconds
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Username at the time of issuance
    pub username: String,
    /// Free-form role string
    pub role: String,
    /// Issuer, always [`ISSUER`]
    pub iss: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The claims could not be signed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    /// Bad signature, malformed, wrong issuer or expired
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Issues and verifies access tokens with a symmetric secret
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<Keys>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation,
            }),
        }
    }

    /// Create a token for a user, valid from now for [`TOKEN_TTL_SECONDS`]
    pub fn issue(&self, user_id: Uuid, username: &str, role: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, username, role, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        username: &str,
        role: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at + Duration::seconds(TOKEN_TTL_SECONDS);
        let claims = Claims {
            user_id,
            username: username.to_string(),
            role: role.to_string(),
            iss: ISSUER.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding).map_err(|e| {
            tracing::error!("Failed to sign token for {}: {:?}", user_id, e);
            TokenError::Signing(e)
        })
    }

    /// Verify and decode a token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map_err(TokenError::InvalidToken)?;
        Ok(token_data.claims)
    }
}
