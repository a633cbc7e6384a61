//! File-backed session store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageError;

use super::SessionStore;

/// Session store keeping one JSON document per key under a root directory.
///
/// The root directory doubles as the session boundary: pointing two processes
/// at the same root shares the stored collection, a fresh (or temporary) root
/// starts a fresh session.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());

        store.set("endpoints-storage", r#"{"endpoints":[]}"#).unwrap();
        let raw = store.get("endpoints-storage").unwrap();

        assert_eq!(raw.as_deref(), Some(r#"{"endpoints":[]}"#));
    }

    #[test]
    fn get_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());

        assert!(store.get("endpoints-storage").unwrap().is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn clear_removes_value_and_tolerates_absent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());

        store.set("k", "v").unwrap();
        store.clear("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Clearing again must stay a no-op.
        store.clear("k").unwrap();
    }

    #[test]
    fn root_directory_is_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested/session"));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
