//! Browser Location Helpers
//!
//! Which page to mount, and the `?boss=<id>` parameter of the detail page.

use percent_encoding::percent_decode_str;

pub const BOSS_PARAM: &str = "boss";
pub const DETAIL_PAGE: &str = "boss.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Detail,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with(DETAIL_PAGE) {
            Page::Detail
        } else {
            Page::List
        }
    }
}

/// First value of `key` in a `?a=1&b=2` query string, decoded
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(name) == key).then(|| decode(value))
        })
        .next()
}

/// Boss id from the query string; an empty value counts as missing
pub fn boss_id(search: &str) -> Option<String> {
    query_param(search, BOSS_PARAM).filter(|id| !id.is_empty())
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Page and search string of the current browser location
pub fn current() -> (Page, String) {
    let location = leptos::prelude::window().location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    (Page::from_path(&path), search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/eldendex/boss.html"), Page::Detail);
        assert_eq!(Page::from_path("/eldendex/index.html"), Page::List);
        assert_eq!(Page::from_path("/"), Page::List);
    }

    #[test]
    fn test_boss_id() {
        assert_eq!(boss_id("?boss=17f69d71826l0i32gkm3ndn3kywxqj").as_deref(), Some("17f69d71826l0i32gkm3ndn3kywxqj"));
        assert_eq!(boss_id("?lang=fr&boss=a%20b").as_deref(), Some("a b"));
        assert_eq!(boss_id("?boss="), None);
        assert_eq!(boss_id("?boss"), None);
        assert_eq!(boss_id(""), None);
        assert_eq!(boss_id("?other=1"), None);
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(query_param("?boss=1&boss=2", "boss").as_deref(), Some("1"));
    }
}
