//! # Key/value storage seam
//!
//! Everything the client persists locally (the session token and the cached
//! user profile) goes through [`KeyValueStore`]. The browser build uses
//! [`crate::LocalStorage`]; tests and native builds use [`crate::MemoryStore`].
//!
//! The trait is synchronous because `window.localStorage` is synchronous, and
//! object-safe so components can share one backend as a [`SharedStore`].

use std::rc::Rc;

/// Errors reported by a storage backend on writes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached (no window, storage disabled, private mode).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage operation on '{key}' failed: {reason}")]
    Rejected { key: String, reason: String },
}

/// String key/value storage with `get`, `set` and `delete`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// A storage backend shared between independently mounted components.
pub type SharedStore = Rc<dyn KeyValueStore>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}
