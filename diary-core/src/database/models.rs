//! Database models
//!
//! Rust structs representing persisted entities.
//! All models use serde with camelCase keys so stored JSON keeps the
//! `createdAt` / `diaryId` layout the frontend reads.

use crate::error::{AppError, Result, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood category attached to every diary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Etc,
}

impl Emotion {
    /// All emotions in display order
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Etc,
    ];

    /// Serialized name, also used as the filter value
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Surprise => "Surprise",
            Emotion::Etc => "Etc",
        }
    }

    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "행복해요",
            Emotion::Sad => "슬퍼요",
            Emotion::Angry => "화나요",
            Emotion::Surprise => "놀랐어요",
            Emotion::Etc => "기타",
        }
    }

    /// Text color token for the label
    pub fn color(self) -> &'static str {
        match self {
            Emotion::Happy => "#850A1B",
            Emotion::Sad => "#3A5CF3",
            Emotion::Angry => "#777777",
            Emotion::Surprise => "#B27D00",
            Emotion::Etc => "#084424",
        }
    }

    /// Medium icon, used on diary cards
    pub fn icon_medium(self) -> String {
        format!("/images/emotion-{}-m.png", self.as_str().to_lowercase())
    }

    /// Small icon, used in the detail header
    pub fn icon_small(self) -> String {
        format!("/images/emotion-{}-s.png", self.as_str().to_lowercase())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    /// Exact, case-sensitive match against the serialized name
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

/// A diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub emotion: Emotion,
    /// Set once at creation; edits never touch it
    pub created_at: DateTime<Utc>,
}

/// A follow-up note attached to a diary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectRecord {
    pub id: u64,
    pub content: String,
    pub diary_id: u64,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated diary form input, used for both create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiaryDraft {
    pub title: String,
    pub content: String,
    pub emotion: Option<Emotion>,
}

/// Diary fields that passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryFields {
    pub title: String,
    pub content: String,
    pub emotion: Emotion,
}

impl DiaryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            emotion: Some(emotion),
        }
    }

    /// True when every required field is filled in, mirroring the form's submit button state
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty() && self.emotion.is_some()
    }

    /// Check required fields and return the trimmed values
    pub fn validate(&self) -> Result<DiaryFields> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.add("title", "제목을 입력해주세요.");
        }
        if self.content.trim().is_empty() {
            errors.add("content", "내용을 입력해주세요.");
        }

        match self.emotion {
            Some(emotion) if errors.is_empty() => Ok(DiaryFields {
                title: self.title.trim().to_string(),
                content: self.content.trim().to_string(),
                emotion,
            }),
            Some(_) => Err(AppError::Validation(errors)),
            None => {
                errors.add("emotion", "감정을 선택해주세요.");
                Err(AppError::Validation(errors))
            }
        }
    }
}

/// Validate retrospect form content, returning it trimmed
pub fn validate_retrospect_content(content: &str) -> Result<String> {
    let mut errors = ValidationErrors::new();

    if content.trim().is_empty() {
        errors.add("content", "회고 내용을 입력해주세요.");
    }

    errors.into_result()?;
    Ok(content.trim().to_string())
}

/// Next id for a collection: one past the largest existing id, or 1 when empty
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> u64 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id([3, 7, 2]), 8);
        assert_eq!(next_id(Vec::<u64>::new()), 1);
        assert_eq!(next_id([1]), 2);
    }

    #[test]
    fn test_emotion_parsing_is_exact() {
        assert_eq!("Happy".parse::<Emotion>(), Ok(Emotion::Happy));
        assert_eq!("Surprise".parse::<Emotion>(), Ok(Emotion::Surprise));
        assert!("happy".parse::<Emotion>().is_err());
        assert!("all".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_emotion_assets() {
        assert_eq!(Emotion::Happy.label(), "행복해요");
        assert_eq!(Emotion::Sad.icon_medium(), "/images/emotion-sad-m.png");
        assert_eq!(Emotion::Etc.icon_small(), "/images/emotion-etc-s.png");
    }

    #[test]
    fn test_diary_record_json_layout() {
        let json = r#"{"id":3,"title":"t","content":"c","emotion":"Angry","createdAt":"2024-01-15T10:00:00.000Z"}"#;
        let record: DiaryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.emotion, Emotion::Angry);

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["emotion"], "Angry");
    }

    #[test]
    fn test_retrospect_json_layout() {
        let json = r#"{"id":1,"content":"later","diaryId":4,"createdAt":"2024-01-16T09:30:00Z"}"#;
        let record: RetrospectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.diary_id, 4);
    }

    #[test]
    fn test_draft_validation_reports_every_missing_field() {
        let draft = DiaryDraft {
            title: "   ".to_string(),
            content: String::new(),
            emotion: None,
        };

        assert!(!draft.is_complete());
        match draft.validate() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.get("title").is_some());
                assert!(errors.get("content").is_some());
                assert!(errors.get("emotion").is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_draft_validation_trims() {
        let draft = DiaryDraft::new("  제목 ", "\n내용\n", Emotion::Sad);
        let fields = draft.validate().unwrap();

        assert_eq!(fields.title, "제목");
        assert_eq!(fields.content, "내용");
        assert_eq!(fields.emotion, Emotion::Sad);
    }

    #[test]
    fn test_retrospect_validation() {
        assert_eq!(validate_retrospect_content(" ok ").unwrap(), "ok");
        assert!(matches!(
            validate_retrospect_content("  "),
            Err(AppError::Validation(_))
        ));
    }
}
