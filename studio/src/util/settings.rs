//! Typed settings persisted as JSON in a key/value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build stores settings in `localStorage`; tests and SSR use
//! [`MemoryStore`]. A [`Setting`] binds a fixed key to a value type so call
//! sites never handle raw strings.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. [`Setting::load_or_else`] and
//! [`Setting::save_logged`] log failures and fall back to the default rather
//! than surfacing storage errors to the user.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;
use std::marker::PhantomData;

use leptos::logging::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored value is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string key/value persistence.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Backend(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A stored value of type `T` under a fixed key.
pub struct Setting<T> {
    key: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> Setting<T> {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key, marker: PhantomData }
    }
}

impl<T: Serialize + DeserializeOwned> Setting<T> {
    /// Read the value. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Fails when the backend is unavailable or the stored JSON does not
    /// decode as `T`.
    pub fn load(&self, store: &impl KeyValueStore) -> Result<Option<T>, StorageError> {
        let Some(raw) = store.get(self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Read the value, falling back to `default` when absent or unreadable.
    pub fn load_or_else(&self, store: &impl KeyValueStore, default: impl FnOnce() -> T) -> T {
        match self.load(store) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(e) => {
                warn!("settings: failed to load {}: {e}", self.key);
                default()
            }
        }
    }

    /// Write the value.
    ///
    /// # Errors
    ///
    /// Fails when the value cannot be encoded or the backend rejects it.
    pub fn save(&self, store: &mut impl KeyValueStore, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        store.set(self.key, &raw)
    }

    /// Write the value, logging instead of returning failures.
    pub fn save_logged(&self, store: &mut impl KeyValueStore, value: &T) {
        if let Err(e) = self.save(store, value) {
            warn!("settings: failed to save {}: {e}", self.key);
        }
    }
}
