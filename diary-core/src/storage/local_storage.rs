//! Local storage contract and the in-memory backend

use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key/value store.
///
/// Reads and writes complete before returning; callers never observe a
/// partially written value.
pub trait LocalStorage: Send + Sync {
    /// Returns the stored value, or `None` when the key was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Storage handle shared between services
pub type SharedStorage = Arc<dyn LocalStorage>;

/// Volatile storage, used for tests and for sessions that should not touch disk
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning a shareable handle
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| AppError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
