//! Database operations for the whitelist table

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use super::WhitelistPath;

/// Insert a path inside a single transaction
pub async fn insert_path(pool: &Pool<Sqlite>, path: &str) -> Result<()> {
    use sqlx::Acquire;

    let mut conn = pool.acquire().await?;
    let mut tx = conn.begin().await?;

    sqlx::query("INSERT INTO whitelist (path) VALUES (?)")
        .bind(path)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Check whether a path is stored
pub async fn contains_path(pool: &Pool<Sqlite>, path: &str) -> Result<bool> {
    let found: Option<String> =
        sqlx::query_scalar("SELECT path FROM whitelist WHERE path = ? LIMIT 1")
            .bind(path)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}

/// Delete any rows matching a path
pub async fn delete_path(pool: &Pool<Sqlite>, path: &str) -> Result<()> {
    sqlx::query("DELETE FROM whitelist WHERE path = ?")
        .bind(path)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete all rows
pub async fn clear(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query("DELETE FROM whitelist").execute(pool).await?;
    Ok(())
}

/// Get all stored entries in storage order
pub async fn all_paths(pool: &Pool<Sqlite>) -> Result<Vec<WhitelistPath>> {
    let paths = sqlx::query_as::<_, WhitelistPath>("SELECT path FROM whitelist")
        .fetch_all(pool)
        .await?;
    Ok(paths)
}
