//! Whitelist store - main entry point
//! Delegates to ops module for actual database operations

use anyhow::Result;
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ops, schema};
use crate::canonical;
use crate::events::{ChangeNotifier, StoreEventReceiver};
use crate::prefs::Preferences;

/// Whitelist database file name
pub const DATABASE_NAME: &str = "whitelist.db";

/// Handle to the whitelisted-folder store
///
/// Opened once by host startup and cloned into whoever needs it; all clones
/// share the same connection pool and event channel.
#[derive(Debug, Clone)]
pub struct Whitelist {
    pool: Pool<Sqlite>,
    notifier: ChangeNotifier,
}

impl Whitelist {
    /// Default location of the whitelist database
    pub fn default_db_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scanlist", "Scanlist")
            .map(|dirs| dirs.data_dir().join(DATABASE_NAME))
    }

    /// Open the store, seeding it with the platform music directory on the
    /// very first open of a fresh installation
    pub async fn open(db_path: &Path, prefs_path: &Path) -> Result<Self> {
        let music_dir = dirs::audio_dir();
        Self::open_with_seed(db_path, prefs_path, music_dir.as_deref()).await
    }

    /// Open the store with an explicit first-run seed directory
    ///
    /// Seeding happens at most once per installation: the persisted
    /// `initialized_whitelist` flag gates it, so a whitelist the user has
    /// cleared stays cleared on later opens. The seed insert does not emit
    /// a change event.
    pub async fn open_with_seed(
        db_path: &Path,
        prefs_path: &Path,
        seed: Option<&Path>,
    ) -> Result<Self> {
        // Ensure parent directory exists (bare file names have an empty one)
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        // WAL keeps scanner reads from blocking on whitelist edits
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await?;

        schema::prepare(&pool).await?;

        let store = Self {
            pool,
            notifier: ChangeNotifier::new(),
        };

        let mut prefs = Preferences::load_from_file(prefs_path)?;
        if !prefs.initialized_whitelist {
            // Whitelisted by default
            if let Some(dir) = seed {
                debug!("Seeding whitelist with {:?}", dir);
                store.insert_canonical(dir).await?;
            }
            prefs.initialized_whitelist = true;
            prefs.save_to_file(prefs_path)?;
        }

        Ok(store)
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> StoreEventReceiver {
        self.notifier.subscribe()
    }

    /// Add a folder to the whitelist
    ///
    /// Empty and already-whitelisted paths are no-ops. The change event
    /// fires either way.
    pub async fn add(&self, path: &Path) -> Result<()> {
        self.add_impl(path).await?;
        self.notifier.media_store_changed();
        Ok(())
    }

    async fn add_impl(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() || self.contains(path).await? {
            return Ok(());
        }
        self.insert_canonical(path).await
    }

    async fn insert_canonical(&self, path: &Path) -> Result<()> {
        let path = canonical::canonical_string(path);
        debug!("Whitelisting {}", path);
        ops::insert_path(&self.pool, &path).await
    }

    /// Check whether a folder is whitelisted
    pub async fn contains(&self, path: &Path) -> Result<bool> {
        if path.as_os_str().is_empty() {
            return Ok(false);
        }
        let path = canonical::canonical_string(path);
        ops::contains_path(&self.pool, &path).await
    }

    /// Remove a folder from the whitelist
    ///
    /// Removing a path that was never whitelisted is not an error; the
    /// change event still fires.
    pub async fn remove(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() {
            let path = canonical::canonical_string(path);
            debug!("Removing {} from whitelist", path);
            ops::delete_path(&self.pool, &path).await?;
        }
        self.notifier.media_store_changed();
        Ok(())
    }

    /// Remove every whitelisted folder
    pub async fn clear(&self) -> Result<()> {
        ops::clear(&self.pool).await?;
        self.notifier.media_store_changed();
        Ok(())
    }

    /// Get all whitelisted folder paths in storage order
    pub async fn paths(&self) -> Result<Vec<String>> {
        let entries = ops::all_paths(&self.pool).await?;
        Ok(entries.into_iter().map(|entry| entry.path).collect())
    }
}
