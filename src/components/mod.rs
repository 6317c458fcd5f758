//! UI Components
//!
//! Leptos components for the list and detail pages.

mod boss_detail_page;
mod boss_image;
mod boss_list_page;
mod boss_table;
mod log_panel;
mod pager;
mod search_form;

pub use boss_detail_page::BossDetailPage;
pub use boss_image::BossImageView;
pub use boss_list_page::BossListPage;
pub use boss_table::BossTable;
pub use log_panel::LogPanel;
pub use pager::Pager;
pub use search_form::SearchForm;
