//! File-backed local storage
//!
//! Each key is stored as its own file: "data/diaries.json" holds the value
//! of the "diaries" key. Writes go to a temp file first and are renamed
//! into place so a crash never leaves a half-written value behind.

use super::local_storage::LocalStorage;
use crate::error::{AppError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory of JSON files, one per storage key
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the storage (create directory if needed)
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::info!("File storage initialized at: {:?}", self.root);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get file path for a key
    fn get_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(AppError::Storage(format!("Invalid storage key: {:?}", key)));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.get_path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.get_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        fs::rename(temp_path, &path)?;

        tracing::debug!("Stored key: {} ({} bytes)", key, value.len());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.get_path(key)?;

        if !path.exists() {
            return Ok(()); // Already removed
        }

        fs::remove_file(&path)?;

        tracing::debug!("Removed key: {}", key);

        Ok(())
    }
}
