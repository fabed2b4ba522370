//! Derived list view

use super::{filter, paginate, search};
use crate::config::{DEFAULT_PAGE_SIZE, FILTER_ALL};
use crate::database::DiaryRecord;
use serde::Serialize;

/// Inputs of the list derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub query: String,
    pub tag: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            tag: FILTER_ALL.to_string(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// What the diary list renders for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub visible_records: Vec<DiaryRecord>,
    pub total_pages: usize,
    pub current_page: usize,
    /// Records left after search and filter
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Run search, filter and pagination over the full collection
pub fn list_view(all: &[DiaryRecord], query: &ListQuery) -> DerivedView {
    let searched = search(all, &query.query);
    let filtered = filter(&searched, &query.tag);
    let page = paginate(&filtered, query.page, query.page_size);

    tracing::debug!(
        "List view: {} of {} diaries match, page {}/{}",
        page.total_items,
        all.len(),
        page.page,
        page.total_pages
    );

    DerivedView {
        has_next_page: page.has_next_page(),
        has_prev_page: page.has_prev_page(),
        visible_records: page.items,
        total_pages: page.total_pages,
        current_page: page.page,
        total_items: page.total_items,
        start_index: page.start_index,
        end_index: page.end_index,
    }
}
