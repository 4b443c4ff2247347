/**
 * User Model and Database Operations
 *
 * This module holds the user record and `UserStore`, the persistence layer
 * over the `users` table.
 *
 * # Uniqueness
 *
 * The table enforces a unique id and a unique username among records that
 * are not soft-deleted. `create` and `update` rely on those constraints and
 * report a violation as `UserStoreError::Conflict`; there is no separate
 * check-then-write step that could race.
 *
 * # Soft Delete
 *
 * A user is deleted when both `deleted_at` and `deleted_by` are set. The
 * store still returns deleted rows; hiding them is the account service's job.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

const SELECT_USER: &str = r#"
    SELECT id, username, name, password, role,
           createdAt, createdBy, updatedAt, updatedBy, deletedAt, deletedBy
    FROM users
"#;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Login name, unique among live users
    pub username: String,
    /// Display name
    pub name: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Free-form role string
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// User that created this record (the user itself on registration)
    pub created_by: Uuid,
    /// Last profile update
    pub updated_at: Option<DateTime<Utc>>,
    /// User that performed the last update
    pub updated_by: Option<Uuid>,
    /// Soft-delete timestamp
    pub deleted_at: Option<DateTime<Utc>>,
    /// User that soft-deleted this record
    pub deleted_by: Option<Uuid>,
    /// Access token issued for this response; never persisted
    #[sqlx(skip)]
    pub access_token: String,
}

impl User {
    /// Build a freshly registered user. The new user is its own creator.
    pub fn new(username: String, name: String, password_hash: String, role: String) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            username,
            name,
            password_hash,
            role,
            created_at: Utc::now(),
            created_by: id,
            updated_at: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
            access_token: String::new(),
        }
    }

    /// Overwrite the mutable profile fields and stamp the updater
    pub fn apply_update(
        &mut self,
        username: String,
        name: String,
        password_hash: String,
        role: String,
        actor: Uuid,
    ) {
        self.username = username;
        self.name = name;
        self.password_hash = password_hash;
        self.role = role;
        self.updated_at = Some(Utc::now());
        self.updated_by = Some(actor);
    }

    /// Mark the record as deleted by `actor`
    pub fn soft_delete(&mut self, actor: Uuid) {
        self.deleted_at = Some(Utc::now());
        self.deleted_by = Some(actor);
    }

    /// True only when both deletion fields are set
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some() && self.deleted_by.is_some()
    }
}

/// User store errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// A uniqueness constraint rejected the write
    #[error("user conflict: {0}")]
    Conflict(String),
    /// No row matched
    #[error("user not found")]
    NotFound,
    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for user records
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Create a store over an already migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user
    ///
    /// # Errors
    /// * `Conflict` - id already present, or username taken by a live user
    pub async fn create(&self, user: &User) -> Result<(), UserStoreError> {
        let mut tx = self.pool.begin().await.map_err(log_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, name, password, role,
                createdAt, createdBy, updatedAt, updatedBy, deletedAt, deletedBy
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(user.created_at)
        .bind(user.created_by)
        .bind(user.updated_at)
        .bind(user.updated_by)
        .bind(user.deleted_at)
        .bind(user.deleted_by)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, user))?;

        tx.commit().await.map_err(log_db_error)?;
        Ok(())
    }

    /// Replace every mutable field of an existing user
    ///
    /// # Errors
    /// * `NotFound` - no user with this id
    /// * `Conflict` - the new username is taken by another live user
    pub async fn update(&self, user: &User) -> Result<(), UserStoreError> {
        let mut tx = self.pool.begin().await.map_err(log_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?,
                name = ?,
                password = ?,
                role = ?,
                updatedAt = ?,
                updatedBy = ?,
                deletedAt = ?,
                deletedBy = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(user.updated_at)
        .bind(user.updated_by)
        .bind(user.deleted_at)
        .bind(user.deleted_by)
        .bind(user.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, user))?;

        if result.rows_affected() == 0 {
            tracing::warn!("Update target not found: {}", user.id);
            return Err(UserStoreError::NotFound);
        }

        tx.commit().await.map_err(log_db_error)?;
        Ok(())
    }

    /// Check whether any row has this id
    pub async fn exists_by_id(&self, id: Uuid) -> Result<bool, UserStoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error)?;

        Ok(count > 0)
    }

    /// Look up a user by username, including soft-deleted rows
    ///
    /// When a deleted row and a live row share the username, the live one wins.
    pub async fn resolve_by_username(&self, username: &str) -> Result<User, UserStoreError> {
        let query = format!(
            "{} WHERE username = ? ORDER BY (deletedAt IS NOT NULL), createdAt DESC LIMIT 1",
            SELECT_USER
        );

        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error)?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", username);
                UserStoreError::NotFound
            })
    }
}

fn log_db_error(e: sqlx::Error) -> UserStoreError {
    tracing::error!("Database error: {:?}", e);
    UserStoreError::Database(e)
}

fn map_write_error(e: sqlx::Error, user: &User) -> UserStoreError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            tracing::warn!("User already exists: {} ({})", user.username, user.id);
            UserStoreError::Conflict(format!("User {} already exists", user.username))
        }
        other => log_db_error(other),
    }
}
