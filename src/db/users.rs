//! Credential store: user identity rows

use sqlx::SqlitePool;

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::models::UserRecord;

/// Insert a new user and return the assigned id
///
/// The `UNIQUE` constraint on `email` decides duplicates, which also covers
/// two registrations racing for the same address.
pub async fn insert_user(pool: &SqlitePool, email: &str, password_hash: &str) -> Result<i64> {
    let sql = format!(
        "INSERT INTO {} (email, password_hash) VALUES (?, ?)",
        tables::USERS
    );

    let result = sqlx::query(&sql)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateIdentity
            }
            other => AppError::Database(other),
        })?;

    Ok(result.last_insert_rowid())
}

/// Look up a user by exact (case-sensitive) email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRecord>> {
    let sql = format!(
        "SELECT id, email, password_hash FROM {} WHERE email = ?",
        tables::USERS
    );

    let user = sqlx::query_as::<_, UserRecord>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Look up a user by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<UserRecord>> {
    let sql = format!(
        "SELECT id, email, password_hash FROM {} WHERE id = ?",
        tables::USERS
    );

    let user = sqlx::query_as::<_, UserRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
