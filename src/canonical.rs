//! Path canonicalization for whitelist keys
//!
//! Membership is keyed on canonical paths so that symlinked or relative
//! spellings of the same directory compare equal.

use std::path::{Component, Path, PathBuf};

/// Canonicalize a path for use as a whitelist key
///
/// Resolves symlinks and relative components when the path exists on disk.
/// Paths that do not exist fall back to a lexical absolute form, so lookups
/// and removals still work against stale entries.
pub fn canonical_path(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!("Failed to canonicalize {:?}: {}, using lexical form", path, e);
            lexical_absolute(path)
        }
    }
}

/// Canonical path rendered as the string form stored in the database
pub fn canonical_string(path: &Path) -> String {
    canonical_path(path).to_string_lossy().into_owned()
}

/// Resolve `.` and `..` components textually, anchoring relative paths at
/// the current directory
fn lexical_absolute(path: &Path) -> PathBuf {
    let mut absolute = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().unwrap_or_default()
    };

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                absolute.pop();
            }
            other => absolute.push(other),
        }
    }

    absolute
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_path_resolves_parent_components() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("music").join("rock")).unwrap();

        let spelled = dir.path().join("music").join("..").join("music").join("rock");
        let expected = dir.path().join("music").join("rock").canonicalize().unwrap();

        assert_eq!(canonical_path(&spelled), expected);
    }

    #[test]
    fn missing_path_falls_back_to_lexical_form() {
        let dir = TempDir::new().unwrap();

        // "ghost" never exists, so filesystem canonicalization cannot apply
        let spelled = dir.path().join("ghost").join("..").join("phantom");

        assert_eq!(canonical_path(&spelled), dir.path().join("phantom"));
    }

    #[test]
    fn current_dir_components_are_dropped() {
        let dir = TempDir::new().unwrap();

        let spelled = dir.path().join(".").join("missing");

        assert_eq!(canonical_path(&spelled), dir.path().join("missing"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_resolves_to_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("music");
        let link = dir.path().join("tunes");
        std::fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(canonical_path(&link), target.canonicalize().unwrap());
    }
}
