//! Diary core library
//!
//! Client-side core of the diary journaling app: the diary list derivation
//! pipeline, the modal stack with its auth guard, and diary/retrospect
//! persistence over a local key/value store.

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod flows;
pub mod guard;
pub mod list;
pub mod modal;
pub mod routes;
pub mod services;
pub mod storage;

pub use app::{init_tracing, App};
pub use error::{AppError, Result};
