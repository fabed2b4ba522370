//! Application state and initialization
//!
//! This module wires storage, services and the shared modal state into one
//! `App`. Pages and flows are created from it so they all see the same
//! storage, change notifier and modal stack.

use crate::database::Repository;
use crate::error::Result;
use crate::flows::{DeleteDiaryFlow, DiaryEditor, NewDiaryFlow};
use crate::guard::AuthGuard;
use crate::list::DiaryListPage;
use crate::modal::{ModalService, ScrollLock};
use crate::services::{
    AppSettings, AuthSession, ChangeNotifier, DiariesService, RetrospectsService,
    SettingsService,
};
use crate::storage::{FileStorage, SharedStorage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Returns false when a global
/// subscriber was already installed, which is then left in place.
pub fn init_tracing() -> bool {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diary_core=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    match result {
        Ok(()) => {
            tracing::info!("Logging initialized");
            true
        }
        Err(e) => {
            tracing::warn!("Tracing subscriber already installed: {}", e);
            false
        }
    }
}

/// Central application state holding all services
#[derive(Clone)]
pub struct App {
    data_dir: Option<PathBuf>,
    settings: AppSettings,
    session: AuthSession,
    diaries: DiariesService,
    retrospects: RetrospectsService,
    modals: ModalService,
}

impl App {
    /// Open the app over a data directory, creating it and the default
    /// settings file when missing
    pub async fn init(data_dir: PathBuf, scroll: Arc<dyn ScrollLock>) -> Result<Self> {
        tracing::info!("Initializing application");
        tracing::info!("App data directory: {:?}", data_dir);

        tokio::fs::create_dir_all(&data_dir).await?;

        let file_storage = FileStorage::new(data_dir.join("storage"));
        file_storage.initialize()?;

        let settings = SettingsService::new(data_dir.clone()).load().await?;

        let mut app = Self::with_storage(Arc::new(file_storage), settings, ModalService::new(scroll));
        app.data_dir = Some(data_dir);

        tracing::info!("Application initialized successfully");

        Ok(app)
    }

    /// Build the app over any storage backend, without touching the filesystem
    pub fn with_storage(storage: SharedStorage, settings: AppSettings, modals: ModalService) -> Self {
        let repo = Repository::new(Arc::clone(&storage));
        let notifier = ChangeNotifier::new();

        Self {
            data_dir: None,
            settings,
            session: AuthSession::new(storage),
            diaries: DiariesService::new(repo.clone(), notifier.clone()),
            retrospects: RetrospectsService::new(repo, notifier),
            modals,
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn diaries(&self) -> &DiariesService {
        &self.diaries
    }

    pub fn retrospects(&self) -> &RetrospectsService {
        &self.retrospects
    }

    pub fn modals(&self) -> &ModalService {
        &self.modals
    }

    /// A fresh guard over the session
    pub fn guard(&self) -> AuthGuard {
        AuthGuard::new(
            Arc::new(self.session.clone()),
            self.modals.clone(),
            self.settings.auth.bypass,
        )
    }

    pub fn list_page(&self) -> DiaryListPage {
        DiaryListPage::mount(&self.diaries, self.settings.list.clone())
    }

    pub fn new_diary_flow(&self) -> NewDiaryFlow {
        NewDiaryFlow::new(self.guard(), self.modals.clone(), self.diaries.clone())
    }

    pub fn delete_flow(&self) -> DeleteDiaryFlow {
        DeleteDiaryFlow::new(self.guard(), self.modals.clone(), self.diaries.clone())
    }

    pub fn editor(&self, diary_id: u64) -> DiaryEditor {
        DiaryEditor::new(diary_id, self.diaries.clone(), self.retrospects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DiaryDraft, Emotion};
    use crate::modal::NoopScrollLock;
    use crate::services::User;
    use crate::storage::MemoryStorage;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "me@example.com".to_string(),
            name: "me".to_string(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_services_share_storage() {
        let app = App::with_storage(
            MemoryStorage::shared(),
            AppSettings::default(),
            ModalService::default(),
        );
        let page = app.list_page();

        app.diaries()
            .create_diary(&DiaryDraft::new("t", "c", Emotion::Etc))
            .unwrap();

        assert_eq!(page.view().total_items, 1);
        assert!(app.editor(1).add_retrospect("r").is_ok());
    }

    #[test]
    fn test_guard_follows_session() {
        let app = App::with_storage(
            MemoryStorage::shared(),
            AppSettings::default(),
            ModalService::default(),
        );
        let guard = app.guard();

        assert!(!guard.check_permission(true));
        guard.cancel_login();

        app.session().login(&user(), "token").unwrap();
        assert!(guard.check_permission(true));
    }

    #[test]
    fn test_init_tracing_reports_existing_subscriber() {
        init_tracing();
        // Whoever installed first, a second install is refused without panicking
        assert!(!init_tracing());
    }

    #[tokio::test]
    async fn test_init_creates_data_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("app");

        let app = App::init(dir.clone(), Arc::new(NoopScrollLock)).await.unwrap();

        assert!(dir.join("settings.json").exists());
        assert!(dir.join("storage").is_dir());
        assert_eq!(app.data_dir(), Some(dir.as_path()));
    }
}
