//! Database module
//!
//! This module provides all persistence functionality including:
//! - Model definitions and form validation
//! - Repository layer reading and writing the JSON collections in local storage

pub mod models;
pub mod repository;

pub use models::*;
pub use repository::Repository;
