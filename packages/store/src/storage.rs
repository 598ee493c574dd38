//! Key/value storage backend used by [`crate::Session`].
//!
//! The trait mirrors the browser `localStorage` API so the web build can hand
//! it straight to `window.localStorage`, while tests and native builds use
//! [`crate::MemoryStorage`].

use thiserror::Error;

/// Failure to persist a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage area is available (no window, storage disabled by the browser).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode value for {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// Synchronous string key/value store.
///
/// Reads never fail: a backend that cannot be read reports the key as absent.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}
