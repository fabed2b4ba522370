//! Settings service
//!
//! Manages application settings persistence using JSON file storage.

use crate::config::{
    DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_SEARCH_DEBOUNCE_MS,
    MAX_VISIBLE_PAGES, MIN_PAGE_SIZE, MIN_VISIBLE_PAGES, SEARCH_DEBOUNCE_MS,
};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

/// Diary list presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSettings {
    /// Diary cards per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Page-number buttons per paginator window
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,
    /// Quiet period before a search input is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE_PAGES
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

impl ListSettings {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(AppError::Generic(format!(
                "Page size must be between {} and {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            )));
        }
        if !(MIN_VISIBLE_PAGES..=MAX_VISIBLE_PAGES).contains(&self.max_visible_pages) {
            return Err(AppError::Generic(format!(
                "Visible pages must be between {} and {}",
                MIN_VISIBLE_PAGES, MAX_VISIBLE_PAGES
            )));
        }
        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(AppError::Generic(format!(
                "Search debounce must not exceed {}ms",
                MAX_SEARCH_DEBOUNCE_MS
            )));
        }
        Ok(())
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Auth guard settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Let every guarded action through (test environments)
    #[serde(default)]
    pub bypass: bool,
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub list: ListSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join("settings.json"),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        settings.list.validate()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        settings.list.validate()?;

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::Generic(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Get diary list settings
    pub async fn get_list(&self) -> Result<ListSettings> {
        let settings = self.load().await?;
        Ok(settings.list)
    }

    /// Update diary list settings
    pub async fn update_list(&self, list: ListSettings) -> Result<()> {
        let mut settings = self.load().await?;
        settings.list = list;
        self.save(&settings).await?;
        Ok(())
    }

    /// Get auth guard settings
    pub async fn get_auth(&self) -> Result<AuthSettings> {
        let settings = self.load().await?;
        Ok(settings.auth)
    }

    /// Update auth guard settings
    pub async fn update_auth(&self, auth: AuthSettings) -> Result<()> {
        let mut settings = self.load().await?;
        settings.auth = auth;
        self.save(&settings).await?;
        Ok(())
    }
}
