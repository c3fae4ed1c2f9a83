//! Persistent collection state with XDG Base Directory compliance.
//!
//! The owned set persists across runs as a pretty-printed JSON array of
//! volume numbers in the user's data directory. Loading sanitizes whatever
//! is on disk back into a valid set.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::collection::set::VolumeSet;

/// Error type for collection state persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the state file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// The state file exists but does not parse as a JSON array of numbers.
    #[error("State file parse error: {0}")]
    ParseError(#[from] SerdeJsonError),
}

/// Handles loading and saving the persisted owned set.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    /// Path to the state file on disk.
    state_path: PathBuf,
}

impl CollectionStore {
    /// Creates a store pointed at the default XDG state path.
    ///
    /// # Returns
    ///
    /// A new `CollectionStore` instance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state_path(get_state_path())
    }

    /// Creates a store with a custom state path (for testing).
    ///
    /// # Arguments
    ///
    /// * `state_path` - Custom path for the state file.
    ///
    /// # Returns
    ///
    /// A new `CollectionStore` instance.
    #[must_use]
    pub fn with_state_path(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    /// Gets the state file path.
    ///
    /// # Returns
    ///
    /// A reference to the state file path.
    #[must_use]
    pub fn get_state_path(&self) -> &PathBuf {
        &self.state_path
    }

    /// Loads the persisted owned set.
    ///
    /// A missing file is not an error; it yields the empty set. Whatever is
    /// read gets sanitized, so out-of-range or duplicate entries written by
    /// older versions or by hand disappear on load.
    ///
    /// # Returns
    ///
    /// The persisted `VolumeSet`, or a `StoreError`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<VolumeSet, StoreError> {
        if !self.state_path.exists() {
            debug!(
                "No collection state file at {:?}, starting empty",
                self.state_path
            );
            return Ok(VolumeSet::new());
        }

        let contents = read_to_string(&self.state_path)?;
        let numbers: Vec<i64> = from_str(&contents)?;
        Ok(VolumeSet::from_numbers(numbers))
    }

    /// Saves the owned set to disk.
    ///
    /// # Arguments
    ///
    /// * `set` - The owned set to persist.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the state file cannot be written.
    pub fn save(&self, set: &VolumeSet) -> Result<(), StoreError> {
        if let Some(parent) = self.state_path.parent() {
            create_dir_all(parent)?;
        }

        debug!("Saving collection state to {:?}", self.state_path);
        let contents = to_string_pretty(set)?;
        write(&self.state_path, contents)?;
        Ok(())
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures proper XDG directory usage for the state file.
///
/// # Returns
///
/// The path to the collection state file.
#[must_use]
pub fn get_state_path() -> PathBuf {
    let mut data_dir = get_xdg_data_home();
    data_dir.push("oxshelf");
    data_dir.push("collection.json");
    data_dir
}

/// Gets the XDG data home directory following XDG Base Directory specification.
///
/// Uses `XDG_DATA_HOME` environment variable if set, otherwise defaults to
/// $HOME/.local/share
fn get_xdg_data_home() -> PathBuf {
    if let Ok(data_home) = var("XDG_DATA_HOME")
        && !data_home.is_empty()
    {
        return PathBuf::from(data_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        return path;
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use crate::collection::{
        set::VolumeSet,
        store::{CollectionStore, StoreError},
    };

    #[test]
    fn test_load_missing_file_yields_empty_set() {
        let dir = tempdir().unwrap();
        let store = CollectionStore::with_state_path(dir.path().join("collection.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = CollectionStore::with_state_path(dir.path().join("collection.json"));
        let set = VolumeSet::from_numbers(vec![1, 42, 111]);

        store.save(&set).unwrap();
        assert_eq!(store.load().unwrap(), set);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("path").join("collection.json");
        let store = CollectionStore::with_state_path(nested);

        store.save(&VolumeSet::from_numbers(vec![7])).unwrap();
        assert_eq!(store.load().unwrap().as_slice(), &[7]);
    }

    #[test]
    fn test_load_sanitizes_stored_numbers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.json");
        write(&path, "[9, 2, 2, 0, 500, 9]").unwrap();

        let store = CollectionStore::with_state_path(path);
        assert_eq!(store.load().unwrap().as_slice(), &[2, 9]);
    }

    #[test]
    fn test_load_corrupt_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.json");
        write(&path, "not json at all").unwrap();

        let store = CollectionStore::with_state_path(path);
        assert!(matches!(
            store.load().unwrap_err(),
            StoreError::ParseError(_)
        ));
    }
}
