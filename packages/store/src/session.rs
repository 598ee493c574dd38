//! # Session store
//!
//! [`Session`] keeps the bearer token and a cached copy of the signed-in
//! [`User`] in a [`KeyValueStorage`] under two keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the raw bearer token |
//! | [`USER_KEY`] (`"user"`) | the user, JSON-encoded |
//!
//! Holding a token only means the client *believes* it is signed in. The token
//! is never checked for expiry or signature here; the backend decides on every
//! request, and a revoked token shows up as the next API call failing.
//! Likewise the cached role is unverified, so anything derived from it is a UI
//! hint only.

use crate::models::User;
use crate::storage::{KeyValueStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Explicit session context over an injectable storage backend.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: KeyValueStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist the token and the user record.
    pub fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user).map_err(|e| StorageError::Encode {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set_item(TOKEN_KEY, token)?;
        self.storage.set_item(USER_KEY, &encoded)?;
        tracing::debug!(user = %user.email, "session saved");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// The cached user, or `None` if nothing is stored or the entry is corrupt.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("ignoring unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Remove both the token and the user.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }
}
