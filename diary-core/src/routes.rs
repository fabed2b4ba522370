//! Application routes and their access levels

use serde::Serialize;
use std::fmt;

/// Navigation targets produced by flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Login,
    Signup,
    DiaryList,
    DiaryDetail(u64),
    Pictures,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/auth/login".to_string(),
            Route::Signup => "/auth/signup".to_string(),
            Route::DiaryList => "/diaries".to_string(),
            Route::DiaryDetail(id) => format!("/diaries/{}", id),
            Route::Pictures => "/pictures".to_string(),
        }
    }

    /// Resolve a path. Trailing slashes are ignored; anything else unknown is None.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/auth/login" => Some(Route::Login),
            "/auth/signup" => Some(Route::Signup),
            "/diaries" => Some(Route::DiaryList),
            "/pictures" => Some(Route::Pictures),
            _ => trimmed
                .strip_prefix("/diaries/")
                .and_then(|id| id.parse::<u64>().ok())
                .filter(|&id| id > 0)
                .map(Route::DiaryDetail),
        }
    }

    pub fn access_level(&self) -> AccessLevel {
        match self {
            Route::DiaryDetail(_) => AccessLevel::Member,
            Route::Login | Route::Signup | Route::DiaryList | Route::Pictures => {
                AccessLevel::Anyone
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Anyone,
    Member,
}

/// Entry path; it only redirects, so it is never gated
pub const ROOT_PATH: &str = "/";

/// Whether a visitor may open `path`. The root is always open and unknown
/// paths are denied.
pub fn check_access(path: &str, logged_in: bool) -> bool {
    if path == ROOT_PATH {
        return true;
    }
    match Route::parse(path).map(|route| route.access_level()) {
        Some(AccessLevel::Anyone) => true,
        Some(AccessLevel::Member) => logged_in,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_back_to_routes() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::DiaryList,
            Route::DiaryDetail(42),
            Route::Pictures,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }

        assert_eq!(Route::parse("/diaries/"), Some(Route::DiaryList));
        assert_eq!(Route::parse("/diaries/abc"), None);
        assert_eq!(Route::parse("/diaries/0"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_access_table() {
        assert!(check_access("/diaries", false));
        assert!(check_access("/pictures", false));
        assert!(check_access("/auth/login", false));

        assert!(!check_access("/diaries/3", false));
        assert!(check_access("/diaries/3", true));

        assert!(!check_access("/unknown", true));
        assert!(check_access("/", false));
    }
}
