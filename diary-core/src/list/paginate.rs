//! Fixed-size pagination stage

/// One page of a list plus the numbers needed to render around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// Page actually served, after clamping
    pub page: usize,
    /// Never less than 1, even for an empty list
    pub total_pages: usize,
    pub total_items: usize,
    /// Index of the first item of the page in the full list
    pub start_index: usize,
    /// One past the last item of the page in the full list
    pub end_index: usize,
}

impl<T> PageSlice<T> {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `total_items`, at least 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Cut page `page` (1-based) of `page_size` items out of `items`.
///
/// `page` is clamped into `1..=total_pages`, so out-of-range requests serve
/// the nearest valid page instead of an empty slice. A zero `page_size`
/// is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages);

    let start_index = (page - 1) * page_size;
    let end_index = (start_index + page_size).min(total_items);

    PageSlice {
        items: items[start_index..end_index].to_vec(),
        page,
        total_pages,
        total_items,
        start_index,
        end_index,
    }
}
