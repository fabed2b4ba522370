//! Diary detail page: inline editing and retrospects

use crate::database::{DiaryDraft, DiaryRecord, RetrospectRecord};
use crate::error::{AppError, Result};
use crate::services::{DiariesService, RetrospectsService};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct EditorState {
    editing: bool,
    draft: DiaryDraft,
}

/// Detail view of one diary
pub struct DiaryEditor {
    diary_id: u64,
    diaries: DiariesService,
    retrospects: RetrospectsService,
    state: Mutex<EditorState>,
}

impl DiaryEditor {
    pub fn new(diary_id: u64, diaries: DiariesService, retrospects: RetrospectsService) -> Self {
        Self {
            diary_id,
            diaries,
            retrospects,
            state: Mutex::new(EditorState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn diary_id(&self) -> u64 {
        self.diary_id
    }

    /// The diary as currently stored
    pub fn diary(&self) -> Result<DiaryRecord> {
        self.diaries.get_diary(self.diary_id)
    }

    /// Retrospects of this diary, most recent first
    pub fn retrospects(&self) -> Vec<RetrospectRecord> {
        self.retrospects.list_for_diary(self.diary_id)
    }

    pub fn is_editing(&self) -> bool {
        self.lock().editing
    }

    /// Switch to edit mode with the form seeded from `record`
    pub fn enter_edit(&self, record: &DiaryRecord) {
        let mut state = self.lock();
        state.draft = DiaryDraft::new(record.title.clone(), record.content.clone(), record.emotion);
        state.editing = true;
    }

    /// Leave edit mode and discard the form
    pub fn exit_edit(&self) {
        *self.lock() = EditorState::default();
    }

    pub fn draft(&self) -> DiaryDraft {
        self.lock().draft.clone()
    }

    /// Replace the form contents while editing
    pub fn set_draft(&self, draft: DiaryDraft) {
        let mut state = self.lock();
        if state.editing {
            state.draft = draft;
        }
    }

    /// Save the form. Edit mode ends only when the update succeeds.
    pub fn submit(&self) -> Result<DiaryRecord> {
        let draft = {
            let state = self.lock();
            if !state.editing {
                return Err(AppError::Generic("Not in edit mode".to_string()));
            }
            state.draft.clone()
        };

        let updated = self.diaries.update_diary(self.diary_id, &draft)?;
        self.exit_edit();

        Ok(updated)
    }

    /// Add a retrospect. Refused while the diary itself is being edited.
    pub fn add_retrospect(&self, content: &str) -> Result<RetrospectRecord> {
        if self.is_editing() {
            return Err(AppError::EditInProgress(self.diary_id));
        }
        self.retrospects.create_retrospect(self.diary_id, content)
    }
}
