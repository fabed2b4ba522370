//! Auth guard
//!
//! Gates actions and pages behind authentication. A denied check shows a
//! login prompt on the modal stack instead of failing, and only one prompt
//! is shown until the user answers it.

use crate::modal::{Modal, ModalPurpose, ModalService};
use crate::routes::{check_access, Route};
use crate::services::Authenticator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

/// Result of the most recent check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Checked(Access),
}

pub struct AuthGuard {
    auth: Arc<dyn Authenticator>,
    modals: ModalService,
    bypass: bool,
    prompt_shown: AtomicBool,
    state: Mutex<GuardState>,
}

impl AuthGuard {
    pub fn new(auth: Arc<dyn Authenticator>, modals: ModalService, bypass: bool) -> Self {
        Self {
            auth,
            modals,
            bypass,
            prompt_shown: AtomicBool::new(false),
            state: Mutex::new(GuardState::Unchecked),
        }
    }

    pub fn state(&self) -> GuardState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_prompt_shown(&self) -> bool {
        self.prompt_shown.load(Ordering::SeqCst)
    }

    /// Allow or deny an action. Evaluated fresh on every call.
    pub fn check_permission(&self, require_auth: bool) -> bool {
        let allowed = !require_auth || self.bypass || self.auth.is_authenticated();
        self.record(allowed, Modal::login_required)
    }

    /// Allow or deny opening a page. Bypass lets every path through.
    pub fn check_path_access(&self, path: &str) -> bool {
        let allowed = self.bypass || check_access(path, self.auth.is_authenticated());
        self.record(allowed, Modal::page_login_required)
    }

    fn record(&self, allowed: bool, prompt: fn() -> Modal) -> bool {
        let access = if allowed { Access::Allowed } else { Access::Denied };
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = GuardState::Checked(access);

        if !allowed && !self.prompt_shown.swap(true, Ordering::SeqCst) {
            tracing::debug!("Access denied, asking for login");
            self.modals.push_stacked(prompt());
        }

        allowed
    }

    /// The user chose to log in: clear every modal and head to the login page
    pub fn confirm_login(&self) -> Route {
        self.modals.close_all();
        self.reset();
        Route::Login
    }

    /// The user dismissed the prompt
    pub fn cancel_login(&self) {
        let top_is_prompt = self.modals.top().is_some_and(|modal| {
            matches!(
                modal.purpose,
                ModalPurpose::LoginRequired | ModalPurpose::PageLoginRequired
            )
        });
        if top_is_prompt {
            self.modals.pop_stacked();
        }
        self.reset();
    }

    /// Allow the next denial to prompt again
    pub fn reset(&self) {
        self.prompt_shown.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(AtomicBool);

    impl Authenticator for Fixed {
        fn is_authenticated(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn build_guard(logged_in: bool, bypass: bool) -> (AuthGuard, ModalService, Arc<Fixed>) {
        let auth = Arc::new(Fixed(AtomicBool::new(logged_in)));
        let modals = ModalService::default();
        let guard = AuthGuard::new(auth.clone(), modals.clone(), bypass);
        (guard, modals, auth)
    }

    #[test]
    fn test_allowed_without_prompt() {
        let (guard, modals, _) = build_guard(true, false);

        assert_eq!(guard.state(), GuardState::Unchecked);
        assert!(guard.check_permission(true));
        assert_eq!(guard.state(), GuardState::Checked(Access::Allowed));
        assert!(modals.stack().is_empty());
    }

    #[test]
    fn test_open_actions_and_bypass() {
        let (guard, modals, _) = build_guard(false, false);
        assert!(guard.check_permission(false));

        let (bypassed, _, _) = build_guard(false, true);
        assert!(bypassed.check_permission(true));

        assert!(modals.stack().is_empty());
    }

    #[test]
    fn test_repeated_denial_prompts_once() {
        let (guard, modals, _) = build_guard(false, false);

        assert!(!guard.check_permission(true));
        assert!(!guard.check_permission(true));
        assert!(!guard.check_permission(true));

        assert_eq!(guard.state(), GuardState::Checked(Access::Denied));
        let stack = modals.stack();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].purpose, ModalPurpose::LoginRequired);
    }

    #[test]
    fn test_cancel_pops_prompt_and_rearms() {
        let (guard, modals, _) = build_guard(false, false);

        guard.check_permission(true);
        guard.cancel_login();

        assert!(modals.stack().is_empty());
        assert!(!modals.is_scroll_locked());

        guard.check_permission(true);
        assert_eq!(modals.stack().len(), 1);
    }

    #[test]
    fn test_confirm_closes_everything() {
        let (guard, modals, _) = build_guard(false, false);

        modals.open_primary(Modal::diary_form());
        guard.check_permission(true);

        assert_eq!(guard.confirm_login(), Route::Login);
        assert!(modals.primary().is_none());
        assert!(modals.stack().is_empty());
        assert!(!guard.is_prompt_shown());
    }

    #[test]
    fn test_predicate_is_live() {
        let (guard, _, auth) = build_guard(false, false);

        assert!(!guard.check_permission(true));
        auth.0.store(true, Ordering::SeqCst);
        assert!(guard.check_permission(true));
    }

    #[test]
    fn test_path_access() {
        let (guard, modals, _) = build_guard(false, false);

        assert!(guard.check_path_access("/diaries"));
        assert!(!guard.check_path_access("/diaries/4"));
        assert!(!guard.check_path_access("/diaries/5"));

        let stack = modals.stack();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].purpose, ModalPurpose::PageLoginRequired);
    }

    #[test]
    fn test_root_path_is_never_gated() {
        let (guard, modals, _) = build_guard(false, false);

        assert!(guard.check_path_access("/"));
        assert_eq!(guard.state(), GuardState::Checked(Access::Allowed));
        assert!(modals.stack().is_empty());
    }

    #[test]
    fn test_bypass_opens_every_path() {
        let (guard, modals, _) = build_guard(false, true);

        assert!(guard.check_path_access("/diaries/4"));
        assert!(guard.check_path_access("/unknown"));
        assert!(modals.stack().is_empty());
    }

    #[test]
    fn test_prompt_outlives_its_guard() {
        let (guard, modals, auth) = build_guard(false, false);
        guard.check_permission(true);
        drop(guard);

        // The prompt belongs to the shared modal stack, not the guard
        assert_eq!(modals.stack().len(), 1);

        let next = AuthGuard::new(auth, modals.clone(), false);
        assert!(!next.is_prompt_shown());
        next.cancel_login();
        assert!(modals.stack().is_empty());
    }
}
