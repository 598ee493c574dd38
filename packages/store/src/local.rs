//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the web platform. It is
//! a zero-size handle that looks up `window.localStorage` on every call, so it
//! is `Clone` and never holds a JS reference across awaits.
//!
//! Reads that fail (no window, storage disabled, security errors) report the
//! key as absent. Writes report [`StorageError`] so the caller can show that
//! the session could not be kept.

use web_sys::Storage;

use crate::storage::{KeyValueStorage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
