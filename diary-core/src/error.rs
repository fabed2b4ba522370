//! Error types for the diary core
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Diary not found: {0}")]
    DiaryNotFound(u64),

    #[error("Diary {0} is being edited")]
    EditInProgress(u64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Per-field messages shown inline next to the offending form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Converts the collected messages into a result, failing when any were recorded.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_lists_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "title is required");
        errors.add("content", "content is required");

        assert_eq!(
            errors.to_string(),
            "content: content is required; title: title is required"
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("emotion", "pick one");
        match errors.into_result() {
            Err(AppError::Validation(e)) => assert_eq!(e.get("emotion"), Some("pick one")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_serializes_as_message() {
        let json = serde_json::to_string(&AppError::DiaryNotFound(7)).unwrap();
        assert_eq!(json, "\"Diary not found: 7\"");
    }
}
