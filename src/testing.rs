//! Test doubles for the controllers.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::BossApi;
use crate::controller::{DetailRenderer, ListRenderer};
use crate::error::{BossError, BossResult};
use crate::models::{BossDetail, BossPage, BossSummary};
use crate::pagination::{NavState, PageQuery};
use crate::view_model::{BossRow, DetailView};

pub fn named(name: &str) -> BossSummary {
    BossSummary {
        id: Some(format!("id-{}", name)),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn page(bosses: Vec<BossSummary>, total: Option<u64>) -> BossPage {
    BossPage { bosses, total }
}

/// Canned responses, served in order; records every request
#[derive(Default)]
pub struct MockApi {
    pages: RefCell<VecDeque<BossResult<BossPage>>>,
    bosses: RefCell<VecDeque<BossResult<BossDetail>>>,
    page_queries: RefCell<Vec<PageQuery>>,
    boss_ids: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn push_page(&self, response: BossResult<BossPage>) {
        self.pages.borrow_mut().push_back(response);
    }

    pub fn push_boss(&self, response: BossResult<BossDetail>) {
        self.bosses.borrow_mut().push_back(response);
    }

    pub fn page_queries(&self) -> Vec<PageQuery> {
        self.page_queries.borrow().clone()
    }

    pub fn boss_ids(&self) -> Vec<String> {
        self.boss_ids.borrow().clone()
    }
}

fn exhausted() -> BossError {
    BossError::Transport("no canned response left".to_string())
}

#[async_trait(?Send)]
impl BossApi for MockApi {
    async fn fetch_page(&self, query: &PageQuery) -> BossResult<BossPage> {
        self.page_queries.borrow_mut().push(query.clone());
        self.pages.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn fetch_boss(&self, id: &str) -> BossResult<BossDetail> {
        self.boss_ids.borrow_mut().push(id.to_string());
        self.bosses.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Loading,
    Rows(Vec<String>),
    Error(String),
    Nav(NavState),
}

#[derive(Default)]
pub struct RecordingListView {
    events: RefCell<Vec<ListEvent>>,
}

impl RecordingListView {
    pub fn events(&self) -> Vec<ListEvent> {
        self.events.borrow().clone()
    }
}

impl ListRenderer for RecordingListView {
    fn show_loading(&self) {
        self.events.borrow_mut().push(ListEvent::Loading);
    }

    fn show_rows(&self, rows: Vec<BossRow>) {
        let names = rows.into_iter().map(|row| row.name).collect();
        self.events.borrow_mut().push(ListEvent::Rows(names));
    }

    fn show_error(&self, message: &str) {
        self.events.borrow_mut().push(ListEvent::Error(message.to_string()));
    }

    fn show_nav(&self, nav: NavState) {
        self.events.borrow_mut().push(ListEvent::Nav(nav));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Loading,
    Boss(DetailView),
    Error(String),
}

#[derive(Default)]
pub struct RecordingDetailView {
    events: RefCell<Vec<DetailEvent>>,
}

impl RecordingDetailView {
    pub fn events(&self) -> Vec<DetailEvent> {
        self.events.borrow().clone()
    }
}

impl DetailRenderer for RecordingDetailView {
    fn show_loading(&self) {
        self.events.borrow_mut().push(DetailEvent::Loading);
    }

    fn show_boss(&self, view: DetailView) {
        self.events.borrow_mut().push(DetailEvent::Boss(view));
    }

    fn show_error(&self, message: &str) {
        self.events.borrow_mut().push(DetailEvent::Error(message.to_string()));
    }
}
