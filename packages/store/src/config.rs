//! # Client configuration: `gymunity.toml`
//!
//! Defines the optional TOML file (filename: [`GymunityConfig::filename`] =
//! `"gymunity.toml"`) that native builds read from the platform config
//! directory. Web builds have no file system and use the defaults plus the
//! build-time environment override.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [news]
//! page_size = 6          # feed and explore
//! saved_page_size = 12   # saved articles
//! ```
//!
//! ## Environment override
//!
//! `GYMUNITY_API_BASE_URL` replaces `api.base_url`. It is read at runtime on
//! native targets and baked in at compile time for wasm, where no process
//! environment exists.
//!
//! All structs derive `Default` so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "GYMUNITY_API_BASE_URL";

/// Top-level configuration stored in `gymunity.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GymunityConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub news: NewsConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// News pagination settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_saved_page_size")]
    pub saved_page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_page_size() -> u32 {
    6
}

fn default_saved_page_size() -> u32 {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            saved_page_size: default_saved_page_size(),
        }
    }
}

impl GymunityConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            news: NewsConfig::default(),
        }
    }

    /// Builder method to set the feed page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.news.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gymunity.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Self::from_toml(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply `GYMUNITY_API_BASE_URL` if set and non-empty.
    pub fn with_env_override(self) -> Self {
        let runtime = std::env::var(BASE_URL_ENV).ok();
        let compiled = option_env!("GYMUNITY_API_BASE_URL").map(str::to_string);
        self.with_base_url_override(runtime.or(compiled))
    }

    fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GymunityConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.news.page_size, 6);
        assert_eq!(config.news.saved_page_size, 12);
        assert_eq!(GymunityConfig::from_toml("").unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let config = GymunityConfig::from_toml("[news]\npage_size = 9\n").unwrap();
        assert_eq!(config.news.page_size, 9);
        assert_eq!(config.news.saved_page_size, 12);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GymunityConfig::new("https://api.gymunity.app").with_page_size(10);
        let text = config.to_toml().unwrap();
        assert_eq!(GymunityConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = GymunityConfig::default()
            .with_base_url_override(Some(" https://staging.gymunity.app ".into()));
        assert_eq!(config.api.base_url, "https://staging.gymunity.app");

        let config = GymunityConfig::default().with_base_url_override(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("gymunity_missing_config_test.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(GymunityConfig::load(&path).unwrap(), GymunityConfig::default());
    }
}
