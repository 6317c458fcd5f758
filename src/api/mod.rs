//! Remote Boss API
//!
//! Bindings to the fan API, behind a trait so controllers can be driven by
//! an in-memory implementation in tests.

mod http;
mod response;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::BossResult;
use crate::models::{BossDetail, BossPage};
use crate::pagination::PageQuery;

pub use http::HttpBossApi;

/// Everything except RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Data source for both pages.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait BossApi {
    /// `GET <base>/bosses?page=&limit=[&name=]`
    async fn fetch_page(&self, query: &PageQuery) -> BossResult<BossPage>;

    /// `GET <base>/bosses/<id>`
    async fn fetch_boss(&self, id: &str) -> BossResult<BossDetail>;
}

/// Percent-encode a value for use as a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("17f69d71826l0i32gkm3ndn3kywxqj"), "17f69d71826l0i32gkm3ndn3kywxqj");
        assert_eq!(encode_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_component("x-y_z.~"), "x-y_z.~");
    }
}
