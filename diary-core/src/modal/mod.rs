//! Modal subsystem
//!
//! Two independent slots: a primary modal (the innermost dialog, e.g. the
//! diary form) and a LIFO stack of modals layered above it (e.g. a
//! "discard draft?" confirmation). Closing the primary slot leaves the
//! stack alone; `close_all` clears both.

pub mod descriptor;
pub mod stack;

pub use descriptor::{Modal, ModalActions, ModalPurpose, ModalVariant};
pub use stack::{ModalLayer, ModalService, ModalStack, NoopScrollLock, ScrollLock};
