//! Application configuration constants
//!
//! Central location for all configuration constants, storage keys,
//! and validation boundaries used throughout the application.

// ===== Storage Keys =====

/// Local storage key holding the JSON array of diary records
pub const DIARIES_KEY: &str = "diaries";
/// Local storage key holding the JSON array of retrospect records
pub const RETROSPECTS_KEY: &str = "retrospects";
/// Local storage key holding the session token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Local storage key holding the JSON-encoded signed-in user
pub const USER_KEY: &str = "user";

// ===== Diary List =====

/// Number of diary cards shown per page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Number of page-number buttons in one paginator window
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Delay between the last search keystroke and the list recomputation
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Card titles longer than this many characters are cut and suffixed with "..."
pub const CARD_TITLE_MAX_CHARS: usize = 20;

/// Filter value that disables emotion filtering
pub const FILTER_ALL: &str = "all";

// ===== Modals =====

/// Layering order of the primary modal; stacked modals sit above it
pub const MODAL_BASE_Z_INDEX: u32 = 50;

// ===== Settings Limits =====

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest accepted page size (keeps a single page renderable)
pub const MAX_PAGE_SIZE: usize = 100;

/// Smallest accepted paginator window
pub const MIN_VISIBLE_PAGES: usize = 1;

/// Largest accepted paginator window
pub const MAX_VISIBLE_PAGES: usize = 20;

/// Maximum search debounce in milliseconds (beyond this typing feels unresponsive)
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 5_000;
