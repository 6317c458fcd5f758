//! Log Panel Component
//!
//! Collapsible footer showing the logger's recent lines, refreshed on demand.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move |_| set_lines.set(console_logger::recent_lines());

    view! {
        <details class="log-panel">
            <summary>"Log"</summary>
            <button type="button" on:click=refresh>"Refresh"</button>
            <pre>{move || lines.get().join("\n")}</pre>
        </details>
    }
}
