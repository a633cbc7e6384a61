//! In-memory session store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

use super::SessionStore;

/// Session store backed by a plain in-process map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();

        store.set("k", "v").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn clear_removes_value() {
        let store = MemoryStore::new();

        store.set("k", "v").unwrap();
        store.clear("k").unwrap();

        assert!(store.get("k").unwrap().is_none());
        store.clear("k").unwrap();
    }
}
