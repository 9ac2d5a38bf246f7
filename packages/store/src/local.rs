//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used by the web build. It is a
//! zero-size handle that looks up `window.localStorage` on every call, so it
//! can be cloned freely and always observes writes made by other components
//! (or other tabs) in between.
//!
//! Reads swallow errors and return `None`: a disabled or inaccessible storage
//! degrades to "nothing persisted", which the session reader maps to an
//! anonymous visitor. Writes report a [`StorageError`] so callers can log them.

use crate::kv::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("window not available".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage().ok()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read '{key}' from localStorage: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
