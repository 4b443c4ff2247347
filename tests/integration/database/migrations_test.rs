//! Database migration tests
//!
//! Ensure migrations run and the schema enforces the user-store rules.

use pretty_assertions::assert_eq;
use user_accounts::backend::server::config::load_database;
use uuid::Uuid;

use crate::common::database::{create_test_pool, file_config};

#[tokio::test]
async fn test_users_table_exists() {
    let pool = create_test_pool().await;

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1").execute(&pool).await;

    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    let first = load_database(&config).await.unwrap();
    first.close().await;

    let second = load_database(&config).await;
    assert!(second.is_ok(), "Reopening a migrated database should succeed");
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());
    let id = Uuid::new_v4();

    let pool = load_database(&config).await.unwrap();
    insert_user(&pool, id, "alice", None).await.unwrap();
    pool.close().await;

    let pool = load_database(&config).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_live_usernames_are_unique() {
    let pool = create_test_pool().await;

    insert_user(&pool, Uuid::new_v4(), "alice", None).await.unwrap();
    let duplicate = insert_user(&pool, Uuid::new_v4(), "alice", None).await;

    assert!(duplicate.is_err(), "Second live alice should be rejected");
}

#[tokio::test]
async fn test_deleted_username_can_be_reused() {
    let pool = create_test_pool().await;

    insert_user(&pool, Uuid::new_v4(), "alice", Some(Uuid::new_v4()))
        .await
        .unwrap();
    let live = insert_user(&pool, Uuid::new_v4(), "alice", None).await;

    assert!(live.is_ok(), "Deleted rows should not reserve the username");
}

#[tokio::test]
async fn test_deletion_fields_are_paired() {
    let pool = create_test_pool().await;

    let result = sqlx::query(
        "INSERT INTO users (id, username, name, password, role, createdAt, createdBy, deletedAt)
         VALUES (?, 'alice', '', 'hash', '', '2024-01-01T00:00:00Z', ?, '2024-01-02T00:00:00Z')",
    )
    .bind(Uuid::new_v4())
    .bind(Uuid::new_v4())
    .execute(&pool)
    .await;

    assert!(result.is_err(), "deletedAt without deletedBy should be rejected");
}

async fn insert_user(
    pool: &sqlx::SqlitePool,
    id: Uuid,
    username: &str,
    deleted_by: Option<Uuid>,
) -> Result<(), sqlx::Error> {
    let deleted_at = deleted_by.map(|_| "2024-01-02T00:00:00Z");
    sqlx::query(
        "INSERT INTO users (id, username, name, password, role, createdAt, createdBy, deletedAt, deletedBy)
         VALUES (?, ?, '', 'hash', '', '2024-01-01T00:00:00Z', ?, ?, ?)",
    )
    .bind(id)
    .bind(username)
    .bind(id)
    .bind(deleted_at)
    .bind(deleted_by)
    .execute(pool)
    .await?;
    Ok(())
}
