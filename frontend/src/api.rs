pub mod books;
pub mod user_data;
pub mod utils;

use crate::config::Config;

/// Joins `path` onto the configured API origin. An empty origin keeps the
/// URL relative to the page.
pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_is_relative_by_default() {
        assert_eq!(api_url("/api/books/abc"), "/api/books/abc");
    }

    #[test]
    fn test_join_url_drops_trailing_slash_on_origin() {
        assert_eq!(join_url("https://shelf.example/", "/api/books"), "https://shelf.example/api/books");
        assert_eq!(join_url("https://shelf.example", "/api/books"), "https://shelf.example/api/books");
    }
}
