//! Paginator model
//!
//! Page-number buttons are shown in fixed blocks: with five buttons per
//! block, pages 1-5 show `1..=5`, pages 6-10 show `6..=10`, and so on.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Page numbers to render for `current_page`.
///
/// `current_page` is clamped into `1..=total_pages` first; a block never
/// extends past the last page.
pub fn page_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let visible = max_visible.clamp(1, total_pages);
    let current = current_page.clamp(1, total_pages);

    let window_start = (current - 1) / visible * visible + 1;
    let window_end = total_pages.min(window_start + visible - 1);

    window_start..=window_end
}

/// Navigation request coming from a paginator control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    To(usize),
}

/// A page-number button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// State of a paginator widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paginator {
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
}

impl Paginator {
    pub fn new(current_page: usize, total_pages: usize, max_visible: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            max_visible: max_visible.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Buttons of the block containing the current page
    pub fn buttons(&self) -> Vec<PageButton> {
        page_window(self.current_page, self.total_pages, self.max_visible)
            .map(|page| PageButton {
                page,
                active: page == self.current_page,
            })
            .collect()
    }

    /// First and previous controls are disabled on the first page
    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    /// Next and last controls are disabled on the last page
    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    pub fn is_disabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First | PageNav::Prev => self.is_first(),
            PageNav::Next | PageNav::Last => self.is_last(),
            PageNav::To(_) => false,
        }
    }

    /// Resolve a navigation request to the page to switch to.
    ///
    /// Returns `None` when the control is disabled or the target is the
    /// current page, in which case no change should be signaled.
    pub fn navigate(&self, nav: PageNav) -> Option<usize> {
        if self.is_disabled(nav) {
            return None;
        }

        let target = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current_page.saturating_sub(1),
            PageNav::Next => self.current_page + 1,
            PageNav::Last => self.total_pages,
            PageNav::To(page) => page,
        }
        .clamp(1, self.total_pages);

        (target != self.current_page).then_some(target)
    }
}
