//! One-time initialization flag persistence
//!
//! A small JSON preference file holding flags that must survive restarts,
//! here the gate that keeps the default music directory from being reseeded
//! after the user has cleared it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Persisted preferences consulted by the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Whether the whitelist has ever been seeded with the default music
    /// folder
    #[serde(default)]
    pub initialized_whitelist: bool,
}

impl Preferences {
    /// Get the default preferences file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scanlist", "Scanlist")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    /// Load preferences from a specific file
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| PrefsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| PrefsError::Parse(e.to_string()))
    }

    /// Save preferences to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), PrefsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| PrefsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| PrefsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with preferences
#[derive(Debug, Clone)]
pub enum PrefsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "IO error: {}", e),
            PrefsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PrefsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load_from_file(&dir.path().join("preferences.json")).unwrap();
        assert!(!prefs.initialized_whitelist);
    }

    #[test]
    fn flag_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            initialized_whitelist: true,
        };
        prefs.save_to_file(&path).unwrap();

        let loaded = Preferences::load_from_file(&path).unwrap();
        assert!(loaded.initialized_whitelist);
    }

    #[test]
    fn unreadable_content_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        match Preferences::load_from_file(&path) {
            Err(PrefsError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
