/**
 * Account Service
 *
 * Orchestrates registration, login, profile lookup and profile update on top
 * of the user store, the password hasher and the token issuer. Handlers stay
 * thin and call into this service; every method returns `BackendError` so
 * the outcome maps straight onto an HTTP status.
 *
 * bcrypt is deliberately slow, so hashing and verification run on tokio's
 * blocking thread pool.
 */

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserRequest};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{User, UserStore};
use crate::backend::error::BackendError;

/// Message returned when the submitted password does not match
pub const WRONG_PASSWORD: &str = "Password False!";

/// Account operations exposed to the HTTP layer
#[derive(Debug, Clone)]
pub struct AccountService {
    store: UserStore,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AccountService {
    pub fn new(store: UserStore, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a new user and issue its first token
    ///
    /// # Errors
    ///
    /// * `BadRequest` - username or password missing
    /// * `Conflict` - id or username already taken
    /// * `Internal` - hashing or token signing failed
    pub async fn register(&self, request: UserRequest) -> Result<User, BackendError> {
        request.validate()?;
        tracing::info!("Registering user: {}", request.username);

        let password_hash = self.hash_password(request.password).await?;
        let mut user = User::new(request.username, request.name, password_hash, request.role);

        self.store.create(&user).await?;
        user.access_token = self.tokens.issue(user.id, &user.username, &user.role)?;

        tracing::info!("User created successfully: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Check credentials and issue a token
    ///
    /// # Errors
    ///
    /// * `BadRequest` - fields missing, or [`WRONG_PASSWORD`]
    /// * `NotFound` - unknown or soft-deleted username
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, BackendError> {
        request.validate()?;
        tracing::info!("Login request for: {}", request.username);

        let user = self.resolve_by_username(&request.username).await?;

        if !self.verify_password(request.password, user.password_hash.clone()).await? {
            tracing::warn!("Invalid password for user: {}", user.username);
            return Err(BackendError::bad_request(WRONG_PASSWORD));
        }

        let access_token = self.tokens.issue(user.id, &user.username, &user.role)?;
        tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

        Ok(LoginResponse { access_token })
    }

    /// Look up a live user by username
    ///
    /// Soft-deleted users are reported as `NotFound` even though the store
    /// still holds the row.
    pub async fn resolve_by_username(&self, username: &str) -> Result<User, BackendError> {
        let user = self.store.resolve_by_username(username).await?;
        if user.is_deleted() {
            tracing::warn!("User is deleted: {} ({})", user.username, user.id);
            return Err(BackendError::not_found("User"));
        }
        Ok(user)
    }

    /// Overwrite the profile of `username` with the request values
    ///
    /// The user edits its own record, so it is stamped as the updater. A new
    /// token carrying the possibly changed username and role is attached to
    /// the returned user.
    pub async fn update_profile(
        &self,
        username: &str,
        request: UserRequest,
    ) -> Result<User, BackendError> {
        request.validate()?;
        let mut user = self.resolve_by_username(username).await?;

        let password_hash = self.hash_password(request.password).await?;
        let actor = user.id;
        user.apply_update(request.username, request.name, password_hash, request.role, actor);

        self.store.update(&user).await?;
        user.access_token = self.tokens.issue(user.id, &user.username, &user.role)?;

        tracing::info!("Profile updated: {} -> {} ({})", username, user.username, user.id);
        Ok(user)
    }

    async fn hash_password(&self, password: String) -> Result<String, BackendError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| BackendError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!("Failed to hash password: {:?}", e);
                BackendError::internal(format!("failed to hash password: {}", e))
            })
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, BackendError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| BackendError::internal(format!("password check task failed: {}", e)))
    }
}
