//! Boss List Page
//!
//! Wires the list controller to the table, pager and search form.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{BossTable, Pager, SearchForm};
use crate::context::use_app_context;
use crate::controller::ListController;
use crate::store::{ListPageState, ListSurface};

/// User intents handled by the list controller
#[derive(Clone, Debug)]
enum ListAction {
    Load,
    Next,
    Previous,
    Search(String),
}

#[component]
pub fn BossListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ListPageState::default());
    let controller = StoredValue::new_local(Rc::new(ListController::new(
        ctx.api(),
        ListSurface::new(store),
    )));

    // Errors are already drawn in the table by the controller
    let dispatch = move |action: ListAction| {
        let controller = controller.get_value();
        spawn_local(async move {
            let result = match &action {
                ListAction::Load => controller.load_page(None).await,
                ListAction::Next => controller.go_next().await,
                ListAction::Previous => controller.go_previous().await,
                ListAction::Search(term) => controller.search(term).await,
            };
            match result {
                Ok(outcome) => log::debug!("[BossListPage] {:?} -> {:?}", action, outcome),
                Err(err) => log::debug!("[BossListPage] {:?} failed: {}", action, err),
            }
        });
    };

    // Load the first page on mount
    Effect::new(move |_| dispatch(ListAction::Load));

    let on_previous = Callback::new(move |_: ()| dispatch(ListAction::Previous));
    let on_next = Callback::new(move |_: ()| dispatch(ListAction::Next));
    let on_search = Callback::new(move |term: String| dispatch(ListAction::Search(term)));

    view! {
        <section class="boss-list">
            <h1>"Eldendex"</h1>
            <SearchForm on_search=on_search />
            <BossTable store=store />
            <Pager store=store on_previous=on_previous on_next=on_next />
        </section>
    }
}
