//! Page State Stores
//!
//! Reactive state the controllers render into. The list page uses a
//! reactive_stores `Store` so the table and the pager update independently;
//! the detail page has a single signal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{DetailRenderer, ListRenderer};
use crate::pagination::NavState;
use crate::view_model::{BossRow, DetailView};

/// What the list table body currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum TableContent {
    Loading,
    Rows(Vec<BossRow>),
    Error(String),
}

impl Default for TableContent {
    fn default() -> Self {
        TableContent::Rows(Vec::new())
    }
}

/// List page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListPageState {
    /// Table body
    pub table: TableContent,
    /// Pager buttons and label
    pub nav: NavState,
}

/// Type alias for the list store
pub type ListStore = Store<ListPageState>;

/// [`ListRenderer`] writing into the list store
#[derive(Clone, Copy)]
pub struct ListSurface {
    store: ListStore,
}

impl ListSurface {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }
}

impl ListRenderer for ListSurface {
    fn show_loading(&self) {
        *self.store.table().write() = TableContent::Loading;
    }

    fn show_rows(&self, rows: Vec<BossRow>) {
        *self.store.table().write() = TableContent::Rows(rows);
    }

    fn show_error(&self, message: &str) {
        *self.store.table().write() = TableContent::Error(message.to_string());
    }

    fn show_nav(&self, nav: NavState) {
        *self.store.nav().write() = nav;
    }
}

/// What the detail page currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum DetailContent {
    Loading,
    Boss(DetailView),
    Error(String),
}

/// [`DetailRenderer`] writing into one signal; every call replaces the
/// title, media and info table together
#[derive(Clone, Copy)]
pub struct DetailSurface {
    content: RwSignal<DetailContent>,
}

impl DetailSurface {
    pub fn new(content: RwSignal<DetailContent>) -> Self {
        Self { content }
    }
}

impl DetailRenderer for DetailSurface {
    fn show_loading(&self) {
        self.content.set(DetailContent::Loading);
    }

    fn show_boss(&self, view: DetailView) {
        self.content.set(DetailContent::Boss(view));
    }

    fn show_error(&self, message: &str) {
        self.content.set(DetailContent::Error(message.to_string()));
    }
}
