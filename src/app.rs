//! Eldendex App
//!
//! Application shell: provides the context and mounts the page matching the
//! browser location (`boss.html` → detail, anything else → list).

use leptos::prelude::*;

use crate::components::{BossDetailPage, BossListPage, LogPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::location::{self, Page};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    let (page, search) = location::current();
    log::info!("[APP] Mounting {:?} page", page);

    view! {
        <main class="eldendex">
            {match page {
                Page::List => view! { <BossListPage /> }.into_any(),
                Page::Detail => view! {
                    <BossDetailPage boss_id=location::boss_id(&search) />
                }.into_any(),
            }}
            <LogPanel />
        </main>
    }
}
