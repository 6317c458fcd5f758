//! Pager Component
//!
//! Previous / next buttons around the "Page X / Y" label.

use leptos::prelude::*;

use crate::store::{ListPageStateStoreFields, ListStore};

#[component]
pub fn Pager(
    store: ListStore,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                id="previous-page"
                type="button"
                disabled=move || !store.nav().get().previous_enabled
                on:click=move |_| on_previous.run(())
            >
                "Previous"
            </button>
            <span id="page">{move || store.nav().get().label()}</span>
            <button
                id="next-page"
                type="button"
                disabled=move || !store.nav().get().next_enabled
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
