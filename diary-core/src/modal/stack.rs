//! Modal stack and the shared modal service

use super::descriptor::Modal;
use crate::config::MODAL_BASE_Z_INDEX;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Document scroll control.
///
/// Called only when the locked state actually changes.
pub trait ScrollLock: Send + Sync {
    fn set_locked(&self, locked: bool);
}

/// Scroll control for hosts without a scrollable document
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn set_locked(&self, _locked: bool) {}
}

/// A modal with its layering order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalLayer {
    pub modal: Modal,
    pub z_index: u32,
}

/// Primary slot plus the stack of modals above it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    primary: Option<Modal>,
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary slot, replacing whatever was there. The stack is untouched.
    pub fn open_primary(&mut self, modal: Modal) {
        self.primary = Some(modal);
    }

    /// Clear the primary slot only
    pub fn close_primary(&mut self) -> Option<Modal> {
        self.primary.take()
    }

    /// Put a modal on top of everything
    pub fn push_stacked(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Remove the topmost stacked modal
    pub fn pop_stacked(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Clear both slots
    pub fn close_all(&mut self) {
        self.primary = None;
        self.stack.clear();
    }

    pub fn primary(&self) -> Option<&Modal> {
        self.primary.as_ref()
    }

    pub fn stack(&self) -> &[Modal] {
        &self.stack
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last().or(self.primary.as_ref())
    }

    /// True while any modal is showing; the document must not scroll then
    pub fn has_open(&self) -> bool {
        self.primary.is_some() || !self.stack.is_empty()
    }

    /// Render order, bottom first. The primary sits at the base z-index and
    /// each stacked modal one above the previous.
    pub fn layers(&self) -> Vec<ModalLayer> {
        let primary = self.primary.iter().map(|modal| ModalLayer {
            modal: modal.clone(),
            z_index: MODAL_BASE_Z_INDEX,
        });

        let stacked = self.stack.iter().enumerate().map(|(index, modal)| ModalLayer {
            modal: modal.clone(),
            z_index: MODAL_BASE_Z_INDEX + index as u32 + 1,
        });

        primary.chain(stacked).collect()
    }
}

struct ModalInner {
    modals: ModalStack,
    scroll: Arc<dyn ScrollLock>,
    scroll_locked: bool,
}

impl Drop for ModalInner {
    fn drop(&mut self) {
        if self.scroll_locked {
            self.scroll.set_locked(false);
        }
    }
}

/// Modal state shared by every component of one application root
#[derive(Clone)]
pub struct ModalService {
    inner: Arc<Mutex<ModalInner>>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new(Arc::new(NoopScrollLock))
    }
}

impl ModalService {
    pub fn new(scroll: Arc<dyn ScrollLock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ModalInner {
                modals: ModalStack::new(),
                scroll,
                scroll_locked: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ModalInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the stack, then bring the scroll lock in line with it
    fn update<R>(&self, f: impl FnOnce(&mut ModalStack) -> R) -> R {
        let (result, transition) = {
            let mut inner = self.lock();
            let result = f(&mut inner.modals);

            let should_lock = inner.modals.has_open();
            let transition = if should_lock != inner.scroll_locked {
                inner.scroll_locked = should_lock;
                Some((Arc::clone(&inner.scroll), should_lock))
            } else {
                None
            };
            (result, transition)
        };

        // Outside the lock so the scroll handler may inspect the service
        if let Some((scroll, locked)) = transition {
            tracing::debug!("Document scroll {}", if locked { "locked" } else { "restored" });
            scroll.set_locked(locked);
        }

        result
    }

    pub fn open_primary(&self, modal: Modal) {
        tracing::debug!("Opening primary modal: {:?}", modal.purpose);
        self.update(|m| m.open_primary(modal));
    }

    pub fn close_primary(&self) -> Option<Modal> {
        self.update(|m| m.close_primary())
    }

    pub fn push_stacked(&self, modal: Modal) {
        tracing::debug!("Stacking modal: {:?}", modal.purpose);
        self.update(|m| m.push_stacked(modal));
    }

    pub fn pop_stacked(&self) -> Option<Modal> {
        self.update(|m| m.pop_stacked())
    }

    pub fn close_all(&self) {
        self.update(|m| m.close_all());
    }

    pub fn primary(&self) -> Option<Modal> {
        self.lock().modals.primary().cloned()
    }

    pub fn stack(&self) -> Vec<Modal> {
        self.lock().modals.stack().to_vec()
    }

    pub fn top(&self) -> Option<Modal> {
        self.lock().modals.top().cloned()
    }

    pub fn layers(&self) -> Vec<ModalLayer> {
        self.lock().modals.layers()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock().scroll_locked
    }

    /// Snapshot of both slots
    pub fn snapshot(&self) -> ModalStack {
        self.lock().modals.clone()
    }
}
