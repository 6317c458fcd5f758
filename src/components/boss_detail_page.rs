//! Boss Detail Page
//!
//! Title, media area and info table for the boss in `?boss=<id>`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::BossImageView;
use crate::context::use_app_context;
use crate::controller::DetailLoader;
use crate::store::{DetailContent, DetailSurface};
use crate::view_model::LOADING_TEXT;

#[component]
pub fn BossDetailPage(boss_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let content = RwSignal::new(DetailContent::Loading);
    let loader = StoredValue::new_local(Rc::new(DetailLoader::new(
        ctx.api(),
        DetailSurface::new(content),
    )));

    Effect::new(move |_| {
        let loader = loader.get_value();
        let boss_id = boss_id.clone();
        spawn_local(async move {
            if let Err(err) = loader.load(boss_id.as_deref()).await {
                log::debug!("[BossDetailPage] load failed: {}", err);
            }
        });
    });

    let title = move || match content.get() {
        DetailContent::Boss(boss) => boss.title,
        DetailContent::Loading | DetailContent::Error(_) => String::new(),
    };

    let media = move || match content.get() {
        DetailContent::Loading => view! { <span>{LOADING_TEXT}</span> }.into_any(),
        DetailContent::Boss(boss) => view! { <BossImageView image=boss.image /> }.into_any(),
        DetailContent::Error(_) => ().into_any(),
    };

    let rows = move || match content.get() {
        DetailContent::Loading => view! {
            <tr><td colspan="2">{LOADING_TEXT}</td></tr>
        }.into_any(),
        DetailContent::Error(message) => view! {
            <tr><td colspan="2" class="error">{format!("Error: {}", message)}</td></tr>
        }.into_any(),
        DetailContent::Boss(boss) => boss
            .rows
            .into_iter()
            .map(|row| view! {
                <tr>
                    <td>{row.label}</td>
                    <td>{row.value}</td>
                </tr>
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section id="boss" class="boss-detail">
            <a href="index.html" class="back-link">"All bosses"</a>
            <h1 id="nom">{title}</h1>
            <div id="boss-media">{media}</div>
            <table class="boss-infos">
                <tbody id="infos">{rows}</tbody>
            </table>
        </section>
    }
}
