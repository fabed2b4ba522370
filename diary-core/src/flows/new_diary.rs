//! Writing a new diary
//!
//! The form opens in the primary slot. Closing it asks for confirmation in
//! a stacked modal, and a successful submit stacks a success notice whose
//! confirmation leads to the new diary.

use crate::database::{DiaryDraft, DiaryRecord};
use crate::error::Result;
use crate::guard::AuthGuard;
use crate::modal::{Modal, ModalService};
use crate::routes::Route;
use crate::services::DiariesService;
use std::sync::{Mutex, PoisonError};

pub struct NewDiaryFlow {
    guard: AuthGuard,
    modals: ModalService,
    diaries: DiariesService,
    registered: Mutex<Option<u64>>,
}

impl NewDiaryFlow {
    pub fn new(guard: AuthGuard, modals: ModalService, diaries: DiariesService) -> Self {
        Self {
            guard,
            modals,
            diaries,
            registered: Mutex::new(None),
        }
    }

    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }

    /// "Write diary" button. Returns false when a login prompt was shown instead.
    pub fn open_form(&self) -> bool {
        if !self.guard.check_permission(true) {
            return false;
        }
        self.modals.open_primary(Modal::diary_form());
        true
    }

    /// Close button on the form
    pub fn request_close(&self) {
        self.modals.push_stacked(Modal::discard_draft());
    }

    /// "Keep writing": dismiss the confirmation only
    pub fn continue_writing(&self) {
        self.modals.pop_stacked();
    }

    /// "Cancel": dismiss the confirmation and the form
    pub fn cancel_registration(&self) {
        self.modals.pop_stacked();
        self.modals.close_primary();
    }

    /// Save the draft and announce it. The form stays open under the notice.
    pub fn submit(&self, draft: &DiaryDraft) -> Result<DiaryRecord> {
        let diary = self.diaries.create_diary(draft)?;

        *self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(diary.id);
        self.modals.push_stacked(Modal::diary_registered());

        Ok(diary)
    }

    /// Acknowledge the success notice, close the form and go to the new diary
    pub fn confirm_success(&self) -> Option<Route> {
        self.modals.pop_stacked();
        self.modals.close_primary();

        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .map(Route::DiaryDetail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Emotion, Repository};
    use crate::error::AppError;
    use crate::modal::ModalPurpose;
    use crate::services::{Authenticator, ChangeNotifier};
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    struct Always(bool);

    impl Authenticator for Always {
        fn is_authenticated(&self) -> bool {
            self.0
        }
    }

    fn flow(logged_in: bool) -> (NewDiaryFlow, ModalService, DiariesService) {
        let modals = ModalService::default();
        let diaries = DiariesService::new(
            Repository::new(MemoryStorage::shared()),
            ChangeNotifier::new(),
        );
        let guard = AuthGuard::new(Arc::new(Always(logged_in)), modals.clone(), false);
        (
            NewDiaryFlow::new(guard, modals.clone(), diaries.clone()),
            modals,
            diaries,
        )
    }

    fn purposes(modals: &ModalService) -> Vec<ModalPurpose> {
        modals.layers().into_iter().map(|l| l.modal.purpose).collect()
    }

    #[test]
    fn test_guest_gets_login_prompt_instead_of_form() {
        let (flow, modals, _) = flow(false);

        assert!(!flow.open_form());
        assert!(modals.primary().is_none());
        assert_eq!(purposes(&modals), vec![ModalPurpose::LoginRequired]);
    }

    #[test]
    fn test_discard_confirmation() {
        let (flow, modals, _) = flow(true);

        assert!(flow.open_form());
        flow.request_close();
        assert_eq!(
            purposes(&modals),
            vec![ModalPurpose::DiaryForm, ModalPurpose::DiscardDraft]
        );

        flow.continue_writing();
        assert_eq!(purposes(&modals), vec![ModalPurpose::DiaryForm]);

        flow.request_close();
        flow.cancel_registration();
        assert!(purposes(&modals).is_empty());
        assert!(!modals.is_scroll_locked());
    }

    #[test]
    fn test_submit_then_confirm_navigates_to_detail() {
        let (flow, modals, diaries) = flow(true);

        flow.open_form();
        let diary = flow
            .submit(&DiaryDraft::new("title", "content", Emotion::Surprise))
            .unwrap();

        assert_eq!(
            purposes(&modals),
            vec![ModalPurpose::DiaryForm, ModalPurpose::DiaryRegistered]
        );
        assert_eq!(diaries.list_diaries().len(), 1);

        assert_eq!(flow.confirm_success(), Some(Route::DiaryDetail(diary.id)));
        assert!(purposes(&modals).is_empty());
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let (flow, modals, diaries) = flow(true);

        flow.open_form();
        let result = flow.submit(&DiaryDraft::default());

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(purposes(&modals), vec![ModalPurpose::DiaryForm]);
        assert!(diaries.list_diaries().is_empty());
        assert_eq!(flow.confirm_success(), None);
    }
}
