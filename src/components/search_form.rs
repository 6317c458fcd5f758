//! Search Form Component
//!
//! Single text input; submitting hands the raw term to `on_search`.

use leptos::prelude::*;

#[component]
pub fn SearchForm(on_search: Callback<String>) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(term.get());
    };

    view! {
        <form class="search-form" on:submit=submit>
            <input
                id="search"
                type="search"
                placeholder="Search a boss..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
