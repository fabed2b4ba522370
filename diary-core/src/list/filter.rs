//! Emotion filter stage

use crate::config::FILTER_ALL;
use crate::database::{DiaryRecord, Emotion};

/// Keep diaries whose emotion matches `tag` exactly.
///
/// `"all"` and values that are not an emotion name pass everything through.
pub fn filter(records: &[DiaryRecord], tag: &str) -> Vec<DiaryRecord> {
    if tag == FILTER_ALL {
        return records.to_vec();
    }

    let Ok(emotion) = tag.parse::<Emotion>() else {
        tracing::debug!("Ignoring unknown emotion filter: {:?}", tag);
        return records.to_vec();
    };

    records
        .iter()
        .filter(|d| d.emotion == emotion)
        .cloned()
        .collect()
}
