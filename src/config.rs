//! Client configuration.
//!
//! The client ships as a static WASM bundle, so overrides are read at build
//! time from environment variables and fall back to same-origin defaults:
//!
//! - `RENTAL_UI_API_BASE_URL` (default `/api`)
//! - `RENTAL_UI_THEME_KEY` (default `rental-ui-theme`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "rental-ui-theme";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST endpoint, without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with build-time environment overrides.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("RENTAL_UI_API_BASE_URL"),
            option_env!("RENTAL_UI_THEME_KEY"),
        )
    }

    /// Defaults overlaid with the given overrides; blank values are ignored.
    #[must_use]
    pub fn with_overrides(api_base_url: Option<&str>, theme_storage_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(key) = theme_storage_key.map(str::trim).filter(|s| !s.is_empty()) {
            config.theme_storage_key = key.to_owned();
        }
        config
    }

    /// Absolute endpoint for `path` (which must start with `/`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
