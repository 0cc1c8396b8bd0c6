//! Database schema versioning
//!
//! The whitelist is a re-derivable allowlist rather than authoritative
//! user data, so version changes in either direction take the destructive
//! path: drop the table and start empty.

use anyhow::Result;
use sqlx::{Pool, Sqlite};

/// Current schema version, stamped into SQLite's user_version pragma
pub const SCHEMA_VERSION: i64 = 2;

/// Create the whitelist table, dropping it first on any version mismatch
pub async fn prepare(pool: &Pool<Sqlite>) -> Result<()> {
    // A fresh database reports version 0 and has nothing to drop
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;

    if version != 0 && version != SCHEMA_VERSION {
        tracing::warn!(
            "Whitelist schema version {} (expected {}), dropping table",
            version,
            SCHEMA_VERSION
        );
        sqlx::query("DROP TABLE IF EXISTS whitelist")
            .execute(pool)
            .await?;
    }

    sqlx::query("CREATE TABLE IF NOT EXISTS whitelist (path TEXT NOT NULL)")
        .execute(pool)
        .await?;

    // PRAGMA does not accept bind parameters
    sqlx::query(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))
        .execute(pool)
        .await?;

    Ok(())
}
