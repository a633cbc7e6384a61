//! Session-scoped key-value persistence port.
//!
//! The endpoint collection outlives individual commands but is scoped to a
//! session rather than shared globally; what counts as a session is decided
//! by the backend (for [`FileStore`], by the caller's choice of root
//! directory). The port is injected into the registry so it stays testable
//! without a real backend.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Fixed key under which the serialized endpoint collection is stored.
pub const ENDPOINTS_STORAGE_KEY: &str = "endpoints-storage";

/// Session-scoped key-value store.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Absent keys are a no-op.
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}
