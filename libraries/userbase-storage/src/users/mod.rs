//! Queries against the `users` table

use sqlx::SqlitePool;
use userbase_core::{error::Result, types::*, UserbaseError};

/// Get all users, ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name
         FROM users
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name
         FROM users
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get users with ids inside the closed interval described by `range`
///
/// Uses a primary-key range scan. An empty interval short-circuits
/// without touching the database.
pub async fn get_range(pool: &SqlitePool, range: IdRange) -> Result<Vec<User>> {
    let Some((first, last)) = range.bounds() else {
        return Ok(Vec::new());
    };

    let users = sqlx::query_as::<_, User>(
        "SELECT id, name
         FROM users
         WHERE id BETWEEN ? AND ?
         ORDER BY id",
    )
    .bind(first)
    .bind(last)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Create a new user; the id is assigned by `SQLite`
pub async fn create(pool: &SqlitePool, name: &str) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| UserbaseError::storage("Failed to retrieve created user"))
}

/// Create many users inside one transaction
///
/// Either every name is inserted or none is.
pub async fn create_many(pool: &SqlitePool, names: &[String]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for name in names {
        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;

    Ok(inserted)
}

/// Rename a user, leaving its id untouched
///
/// A `None` name is stored as SQL `NULL`.
pub async fn update_name(
    pool: &SqlitePool,
    id: UserId,
    name: Option<&str>,
) -> Result<Option<User>> {
    let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_by_id(pool, id).await
}

/// Delete a user; returns `false` if there was nothing to delete
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
