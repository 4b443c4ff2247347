/**
 * Authentication Middleware
 *
 * This module protects routes that require a signed-in user. It extracts the
 * bearer token from the Authorization header, verifies it and stores the
 * claims in the request extensions. Handlers receive them through the
 * `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenIssuer};
use crate::backend::error::BackendError;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from a `Bearer <token>` Authorization header
/// 2. Verifies signature, issuer and expiry
/// 3. Attaches the claims to the request extensions
///
/// Any failure short-circuits with 401 Unauthorized; the wrapped handler is
/// not called.
pub async fn auth_middleware(
    State(tokens): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::Unauthorized
    })?;

    tracing::debug!("Authenticated {} ({})", claims.username, claims.user_id);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::Unauthorized
    })?;

    let token = token.trim();
    if token.is_empty() {
        tracing::warn!("Empty bearer token");
        return Err(BackendError::Unauthorized);
    }
    Ok(token)
}

/// Axum extractor for the verified claims of the caller
///
/// Only usable on routes wrapped by [`auth_middleware`]; elsewhere it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            tracing::warn!("Claims not found in request extensions");
            BackendError::Unauthorized
        })?;

        Ok(AuthUser(claims))
    }
}
