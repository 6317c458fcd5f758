//! Pagination State
//!
//! Query state of the boss list: current page, active name filter, and the
//! last known total.

use serde::Serialize;

use crate::config::PAGE_SIZE;
use crate::models::BossSummary;

/// Query parameters of `GET /bosses`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Trimmed filter, or `None` when there is nothing to filter on
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// Enabled state of the pager controls plus the page label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: u32,
    pub total_pages: Option<u64>,
    pub next_enabled: bool,
    pub previous_enabled: bool,
}

impl NavState {
    /// "Page X / Y", one-based; Y is "?" until the total is known
    pub fn label(&self) -> String {
        match self.total_pages {
            Some(pages) => format!("Page {} / {}", self.page + 1, pages),
            None => format!("Page {} / ?", self.page + 1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQueryState {
    page: u32,
    last_query: String,
    total: Option<u64>,
    last_page: Vec<BossSummary>,
}

impl ListQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Bosses of the last successfully loaded page, before de-duplication
    pub fn last_page(&self) -> &[BossSummary] {
        &self.last_page
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.total.map(|total| total.div_ceil(u64::from(PAGE_SIZE)))
    }

    /// False only once the total is known and the next page would start past it
    pub fn has_next(&self) -> bool {
        match self.total {
            Some(total) => (u64::from(self.page) + 1) * u64::from(PAGE_SIZE) < total,
            None => true,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Advance one page; returns false (and leaves the page alone) at the end
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page; returns false on the first page
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Start a new search: back to the first page, filter remembered
    pub fn reset_search(&mut self, term: &str) {
        self.page = 0;
        self.last_query = term.trim().to_string();
    }

    pub fn query(&self, filter: Option<&str>) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: PAGE_SIZE,
            name: normalize_filter(filter),
        }
    }

    /// Record a successful response. A missing total keeps the previous one.
    pub fn apply_page(&mut self, bosses: Vec<BossSummary>, total: Option<u64>) {
        if total.is_some() {
            self.total = total;
        }
        self.last_page = bosses;
    }

    pub fn nav(&self) -> NavState {
        NavState {
            page: self.page,
            total_pages: self.total_pages(),
            next_enabled: self.has_next(),
            previous_enabled: self.has_previous(),
        }
    }
}
