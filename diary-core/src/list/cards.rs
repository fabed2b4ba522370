//! Card view model for the diary grid

use crate::config::CARD_TITLE_MAX_CHARS;
use crate::database::{DiaryRecord, Emotion};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// What one diary card displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryCard {
    pub id: u64,
    pub emotion: Emotion,
    pub label: &'static str,
    pub color: &'static str,
    /// Creation date as "YYYY. MM. DD" in local time
    pub date: String,
    pub title: String,
    pub image: String,
}

impl DiaryCard {
    pub fn from_record(record: &DiaryRecord) -> Self {
        Self::with_timezone(record, &Local)
    }

    /// Build a card rendering the creation date in `tz`
    pub fn with_timezone<Tz: TimeZone>(record: &DiaryRecord, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: record.id,
            emotion: record.emotion,
            label: record.emotion.label(),
            color: record.emotion.color(),
            date: format_card_date(&record.created_at.with_timezone(tz)),
            title: truncate_title(&record.title),
            image: record.emotion.icon_medium(),
        }
    }
}

/// "2024. 01. 15"
pub fn format_card_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y. %m. %d").to_string()
}

/// Titles longer than the card allows are cut and suffixed with "..."
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > CARD_TITLE_MAX_CHARS {
        let cut: String = title.chars().take(CARD_TITLE_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}
