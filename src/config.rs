//! App Configuration
//!
//! Browser builds have no runtime environment, so overrides are read at
//! build time (`ELDENDEX_API_BASE`, `ELDENDEX_LOG`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://eldenring.fanapis.com/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fixed number of bosses per list page
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by the build-time environment
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("ELDENDEX_API_BASE"), option_env!("ELDENDEX_LOG"))
    }

    fn with_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = level.to_string();
        }
        config
    }

    /// Collection endpoint, `<base>/bosses`
    pub fn bosses_url(&self) -> String {
        format!("{}/bosses", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_overrides(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bosses_url(), "https://eldenring.fanapis.com/api/bosses");
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::with_overrides(Some("http://localhost:8080/api/"), Some("debug"));
        assert_eq!(config.bosses_url(), "http://localhost:8080/api/bosses");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_overrides_ignored() {
        let config = AppConfig::with_overrides(Some("  "), Some(""));
        assert_eq!(config, AppConfig::default());
    }
}
