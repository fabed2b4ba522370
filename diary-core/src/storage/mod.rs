//! Storage module
//!
//! Key/value local storage backends. Values are JSON strings, mirroring
//! the browser `localStorage` contract the diary data was designed for.

pub mod file_store;
pub mod local_storage;

pub use file_store::FileStorage;
pub use local_storage::{LocalStorage, MemoryStorage, SharedStorage};
