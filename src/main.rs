//! Eldendex Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod location;
mod models;
mod pagination;
mod store;
mod view_model;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    let level = console_logger::parse_level(&config.log_level);
    if let Err(err) = console_logger::init_logger("Eldendex", level) {
        web_sys::console::error_1(&format!("Logger setup failed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
