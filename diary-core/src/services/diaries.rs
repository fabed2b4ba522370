//! Diaries service
//!
//! High-level business logic for diary operations.
//! Every successful write is persisted before the change is announced.

use super::events::{ChangeEvent, ChangeNotifier};
use crate::database::{next_id, DiaryDraft, DiaryRecord, Repository};
use crate::error::{AppError, Result};
use chrono::Utc;

/// Service for managing diaries
#[derive(Clone)]
pub struct DiariesService {
    repo: Repository,
    notifier: ChangeNotifier,
}

impl DiariesService {
    pub fn new(repo: Repository, notifier: ChangeNotifier) -> Self {
        Self { repo, notifier }
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Create a new diary
    pub fn create_diary(&self, draft: &DiaryDraft) -> Result<DiaryRecord> {
        let fields = draft.validate()?;

        let mut diaries = self.repo.load_diaries();
        let diary = DiaryRecord {
            id: next_id(diaries.iter().map(|d| d.id)),
            title: fields.title,
            content: fields.content,
            emotion: fields.emotion,
            created_at: Utc::now(),
        };

        tracing::info!("Creating new diary: {}", diary.id);

        diaries.push(diary.clone());
        self.repo.persist_diaries(&diaries)?;
        self.notifier.notify(ChangeEvent::DiaryCreated(diary.id));

        tracing::info!("Diary created successfully: {}", diary.id);

        Ok(diary)
    }

    /// Get a diary by ID
    pub fn get_diary(&self, id: u64) -> Result<DiaryRecord> {
        self.repo
            .load_diaries()
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(AppError::DiaryNotFound(id))
    }

    /// List all diaries in stored order
    pub fn list_diaries(&self) -> Vec<DiaryRecord> {
        self.repo.load_diaries()
    }

    /// Update a diary's title, content and emotion.
    ///
    /// The id and creation time are carried over from the stored record.
    pub fn update_diary(&self, id: u64, draft: &DiaryDraft) -> Result<DiaryRecord> {
        tracing::debug!("Updating diary: {}", id);

        let fields = draft.validate()?;

        let mut diaries = self.repo.load_diaries();
        let diary = diaries
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(AppError::DiaryNotFound(id))?;

        diary.title = fields.title;
        diary.content = fields.content;
        diary.emotion = fields.emotion;
        let updated = diary.clone();

        self.repo.persist_diaries(&diaries)?;
        self.notifier.notify(ChangeEvent::DiaryUpdated(id));

        tracing::debug!("Diary updated successfully: {}", id);

        Ok(updated)
    }

    /// Delete a diary. Returns whether a record was removed; a missing id is not an error.
    pub fn delete_diary(&self, id: u64) -> Result<bool> {
        tracing::info!("Deleting diary: {}", id);

        let mut diaries = self.repo.load_diaries();
        let before = diaries.len();
        diaries.retain(|d| d.id != id);

        if diaries.len() == before {
            tracing::debug!("Diary {} not present, nothing to delete", id);
            return Ok(false);
        }

        self.repo.persist_diaries(&diaries)?;
        self.notifier.notify(ChangeEvent::DiaryDeleted(id));

        tracing::info!("Diary deleted successfully: {}", id);

        Ok(true)
    }
}
