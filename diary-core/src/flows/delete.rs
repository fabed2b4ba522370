//! Deleting a diary behind a danger confirmation

use crate::error::Result;
use crate::guard::AuthGuard;
use crate::modal::{Modal, ModalService};
use crate::routes::Route;
use crate::services::DiariesService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

pub struct DeleteDiaryFlow {
    guard: AuthGuard,
    modals: ModalService,
    diaries: DiariesService,
    target: Mutex<Option<u64>>,
    deleting: AtomicBool,
}

impl DeleteDiaryFlow {
    pub fn new(guard: AuthGuard, modals: ModalService, diaries: DiariesService) -> Self {
        Self {
            guard,
            modals,
            diaries,
            target: Mutex::new(None),
            deleting: AtomicBool::new(false),
        }
    }

    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }

    /// Ask before deleting `id`. Returns false when a login prompt was shown instead.
    pub fn request_delete(&self, id: u64) -> bool {
        if !self.guard.check_permission(true) {
            return false;
        }

        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(id);
        self.modals.open_primary(Modal::delete_diary());
        true
    }

    pub fn cancel(&self) {
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.modals.close_primary();
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.load(Ordering::SeqCst)
    }

    /// Delete the remembered diary and head back to the list.
    ///
    /// Returns `Ok(None)` while another confirmation is being processed or
    /// when nothing was requested.
    pub fn confirm(&self) -> Result<Option<Route>> {
        if self.deleting.swap(true, Ordering::SeqCst) {
            tracing::debug!("Delete already in progress, ignoring confirm");
            return Ok(None);
        }

        let result = self.run_delete();
        self.deleting.store(false, Ordering::SeqCst);
        result
    }

    fn run_delete(&self) -> Result<Option<Route>> {
        let target = *self.target.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(id) = target else {
            return Ok(None);
        };

        // Cleared only once the write went through
        self.diaries.delete_diary(id)?;
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.modals.close_primary();

        Ok(Some(Route::DiaryList))
    }
}
