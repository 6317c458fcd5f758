//! Boss Table Component
//!
//! Table body of the list page: loading row, error row, or one row per boss.

use leptos::prelude::*;

use crate::components::BossImageView;
use crate::store::{ListPageStateStoreFields, ListStore, TableContent};
use crate::view_model::{BossRow, LOADING_TEXT, MISSING_LINK};

const COLUMNS: &str = "4";

#[component]
fn BossRowView(row: BossRow) -> impl IntoView {
    let link = match row.detail_href {
        Some(href) => view! { <a href=href>"View"</a> }.into_any(),
        None => view! { <span>{MISSING_LINK}</span> }.into_any(),
    };

    view! {
        <tr>
            <td><BossImageView image=row.image /></td>
            <td>{row.name}</td>
            <td>{row.region}</td>
            <td>{link}</td>
        </tr>
    }
}

#[component]
pub fn BossTable(store: ListStore) -> impl IntoView {
    view! {
        <table class="boss-table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Region"</th>
                    <th>"Details"</th>
                </tr>
            </thead>
            <tbody id="app">
                {move || match store.table().get() {
                    TableContent::Loading => view! {
                        <tr><td colspan=COLUMNS>{LOADING_TEXT}</td></tr>
                    }.into_any(),
                    TableContent::Error(message) => view! {
                        <tr><td colspan=COLUMNS class="error">{format!("Error: {}", message)}</td></tr>
                    }.into_any(),
                    TableContent::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <BossRowView row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}
