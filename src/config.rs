//! Frontend Configuration
//!
//! Backend location and timing knobs. Values are baked in at build time
//! (`FOOD_API_BASE=... trunk build`) since the WASM bundle has no environment.

use std::time::Duration;

/// Default REST backend base path
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Default dashboard refresh period
const DEFAULT_STATS_REFRESH_MS: u32 = 30_000;

/// How long a notification stays on screen
const NOTIFICATION_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Period between dashboard stat refreshes
    pub stats_refresh_ms: u32,
    /// Lifetime of a transient notification
    pub notification_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            stats_refresh_ms: DEFAULT_STATS_REFRESH_MS,
            notification_ms: NOTIFICATION_MS,
        }
    }
}

impl ApiConfig {
    /// Build config from compile-time overrides, falling back to defaults
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("FOOD_API_BASE"), option_env!("FOOD_STATS_REFRESH_MS"))
    }

    fn from_overrides(base: Option<&str>, refresh_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        match refresh_ms.map(|ms| ms.trim().parse::<u32>()) {
            Some(Ok(ms)) if ms > 0 => config.stats_refresh_ms = ms,
            Some(_) => log::warn!("[CONFIG] ignoring invalid FOOD_STATS_REFRESH_MS"),
            None => {}
        }
        config
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_overrides(None, None);
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.stats_refresh_ms, 30_000);
        assert_eq!(config.notification_lifetime(), Duration::from_secs(3));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_overrides(Some("https://food.example.org/api/"), Some("5000"));
        assert_eq!(config.base_url, "https://food.example.org/api");
        assert_eq!(config.stats_refresh_ms, 5000);

        // Garbage refresh keeps the default
        let config = ApiConfig::from_overrides(Some("  "), Some("soon"));
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.stats_refresh_ms, 30_000);
    }

    #[test]
    fn test_endpoint() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("/stats"), "http://localhost:8000/api/stats");
        assert_eq!(config.endpoint("items/7"), "http://localhost:8000/api/items/7");
    }
}
