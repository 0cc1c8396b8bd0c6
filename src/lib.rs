//! Whitelisted music-folder store
//!
//! Persists the set of directory paths a media library scanner is allowed
//! to walk. Paths are keyed by canonical form in a single SQLite table, and
//! every mutation broadcasts a change event so scanning logic knows to
//! rescan.

mod canonical;
mod events;
mod prefs;
mod store;

pub use canonical::{canonical_path, canonical_string};
pub use events::{StoreEvent, StoreEventReceiver};
pub use prefs::{Preferences, PrefsError};
pub use store::{DATABASE_NAME, Whitelist, WhitelistPath};
