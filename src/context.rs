//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpBossApi;
use crate::config::AppConfig;

/// App-wide settings provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// API client for the configured base URL
    pub fn api(&self) -> HttpBossApi {
        HttpBossApi::new(&self.config)
    }
}

/// Get the app context; panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
