//! Title search stage

use crate::database::DiaryRecord;

/// Keep diaries whose title contains `query`, ignoring case and surrounding whitespace.
///
/// A blank query keeps everything. Content is not searched.
pub fn search(records: &[DiaryRecord], query: &str) -> Vec<DiaryRecord> {
    let term = query.trim();
    if term.is_empty() {
        return records.to_vec();
    }

    let term = term.to_lowercase();
    records
        .iter()
        .filter(|d| d.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
