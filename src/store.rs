//! Whitelist storage module
//! Uses SQLite via sqlx for storing whitelisted folder paths

mod models;
mod ops;
mod repository;
mod schema;

pub use models::*;
pub use repository::{DATABASE_NAME, Whitelist};
