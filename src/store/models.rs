//! Database models for whitelist storage

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Whitelisted folder stored in database
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WhitelistPath {
    /// Canonical directory path
    pub path: String,
}
