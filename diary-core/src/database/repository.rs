//! Repository layer for local storage collections
//!
//! Diaries and retrospects are each stored as one JSON array under a fixed
//! key. Loading never fails: missing or malformed data reads as an empty
//! collection and is logged. Persisting rewrites the whole array.

use super::models::*;
use crate::config::{DIARIES_KEY, RETROSPECTS_KEY};
use crate::error::Result;
use crate::storage::SharedStorage;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Repository for the persisted collections
#[derive(Clone)]
pub struct Repository {
    storage: SharedStorage,
}

impl Repository {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Underlying storage, shared with the auth session
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    /// Load all diaries in stored order
    pub fn load_diaries(&self) -> Vec<DiaryRecord> {
        self.load_collection(DIARIES_KEY)
    }

    /// Replace the stored diaries
    pub fn persist_diaries(&self, diaries: &[DiaryRecord]) -> Result<()> {
        self.persist_collection(DIARIES_KEY, diaries)
    }

    /// Load all retrospects in stored order
    pub fn load_retrospects(&self) -> Vec<RetrospectRecord> {
        self.load_collection(RETROSPECTS_KEY)
    }

    /// Replace the stored retrospects
    pub fn persist_retrospects(&self, retrospects: &[RetrospectRecord]) -> Result<()> {
        self.persist_collection(RETROSPECTS_KEY, retrospects)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read {} from storage: {}", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Failed to parse {} from storage, treating as empty: {}", key, e);
                Vec::new()
            }
        }
    }

    fn persist_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set_item(key, &json)?;

        tracing::debug!("Persisted {} {}", items.len(), key);
        Ok(())
    }
}
