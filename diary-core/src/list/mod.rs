//! Diary list derivation
//!
//! The visible slice of the diary list is always derived from scratch:
//! `paginate(filter(search(all, query), tag), page, size)`. Each stage is a
//! pure function; `page` wires them to the page state and the debounced
//! search input.

pub mod cards;
pub mod debounce;
pub mod filter;
pub mod page;
pub mod paginate;
pub mod search;
pub mod view;
pub mod window;

pub use cards::DiaryCard;
pub use debounce::Debouncer;
pub use filter::filter;
pub use page::{reduce, DiaryListPage, FilterOption, ListAction, ListState};
pub use paginate::{paginate, PageSlice};
pub use search::search;
pub use view::{list_view, DerivedView, ListQuery};
pub use window::{page_window, PageButton, PageNav, Paginator};
