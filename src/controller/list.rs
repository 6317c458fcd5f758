//! List Controller
//!
//! Paginated, name-filterable boss list.
//! - One request per page, `PAGE_SIZE` bosses each
//! - The loading row is drawn before the request is sent
//! - Responses to anything but the latest request are dropped

use std::cell::{Cell, RefCell};

use crate::api::BossApi;
use crate::error::BossResult;
use crate::models::BossPage;
use crate::pagination::{ListQueryState, NavState, PageQuery};
use crate::view_model::{build_rows, BossRow};

/// Rendering surface of the list page
pub trait ListRenderer {
    /// Replace the table with a single loading row
    fn show_loading(&self);
    /// Replace the table with these rows
    fn show_rows(&self, rows: Vec<BossRow>);
    /// Replace the table with one error row
    fn show_error(&self, message: &str);
    /// Pager buttons and "Page X / Y" label
    fn show_nav(&self, nav: NavState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// What happened to a navigation request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was fetched and drawn
    Rendered,
    /// A newer request was issued meanwhile; this response was dropped
    Superseded,
    /// Nothing to do (already on the first or last page)
    Skipped,
}

pub struct ListController<A, R> {
    api: A,
    view: R,
    state: RefCell<ListQueryState>,
    status: Cell<ListStatus>,
    latest_request: Cell<u64>,
}

impl<A: BossApi, R: ListRenderer> ListController<A, R> {
    pub fn new(api: A, view: R) -> Self {
        Self {
            api,
            view,
            state: RefCell::new(ListQueryState::new()),
            status: Cell::new(ListStatus::Idle),
            latest_request: Cell::new(0),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn view(&self) -> &R {
        &self.view
    }

    /// Snapshot of the pagination state
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> ListQueryState {
        self.state.borrow().clone()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn status(&self) -> ListStatus {
        self.status.get()
    }

    /// Fetch and draw the current page, filtered by `filter` when non-blank
    pub async fn load_page(&self, filter: Option<&str>) -> BossResult<LoadOutcome> {
        let (ticket, query) = self.begin_load(filter);
        let result = self.api.fetch_page(&query).await;
        self.finish_load(ticket, result)
    }

    pub async fn go_next(&self) -> BossResult<LoadOutcome> {
        let filter = {
            let mut state = self.state.borrow_mut();
            if !state.advance() {
                return Ok(LoadOutcome::Skipped);
            }
            state.last_query().to_string()
        };
        self.load_page(Some(&filter)).await
    }

    pub async fn go_previous(&self) -> BossResult<LoadOutcome> {
        let filter = {
            let mut state = self.state.borrow_mut();
            if !state.retreat() {
                return Ok(LoadOutcome::Skipped);
            }
            state.last_query().to_string()
        };
        self.load_page(Some(&filter)).await
    }

    /// New search from the first page; a blank term clears the filter
    pub async fn search(&self, term: &str) -> BossResult<LoadOutcome> {
        self.state.borrow_mut().reset_search(term);
        self.load_page(Some(term)).await
    }

    fn begin_load(&self, filter: Option<&str>) -> (u64, PageQuery) {
        let ticket = self.latest_request.get() + 1;
        self.latest_request.set(ticket);
        self.status.set(ListStatus::Loading);
        self.view.show_loading();

        let query = self.state.borrow().query(filter);
        log::debug!("[list] request #{} page={} name={:?}", ticket, query.page, query.name);
        (ticket, query)
    }

    fn finish_load(&self, ticket: u64, result: BossResult<BossPage>) -> BossResult<LoadOutcome> {
        let latest = self.latest_request.get();
        if ticket != latest {
            log::debug!("[list] dropping response #{} (latest is #{})", ticket, latest);
            return Ok(LoadOutcome::Superseded);
        }

        match result {
            Ok(page) => {
                let rows = build_rows(&page.bosses);
                let (received, nav) = {
                    let mut state = self.state.borrow_mut();
                    state.apply_page(page.bosses, page.total);
                    (state.last_page().len(), state.nav())
                };
                log::info!("[list] showing {} of {} bosses, {}", rows.len(), received, nav.label());
                self.view.show_rows(rows);
                self.view.show_nav(nav);
                self.status.set(ListStatus::Loaded);
                Ok(LoadOutcome::Rendered)
            }
            Err(err) => {
                log::warn!("[list] request #{} failed: {:?}", ticket, err);
                self.view.show_error(&err.to_string());
                self.status.set(ListStatus::Errored);
                Err(err)
            }
        }
    }
}
