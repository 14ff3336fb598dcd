//! Dashboard configuration
//!
//! Loaded from `config.toml` in the platform config directory. Missing files
//! and missing keys fall back to defaults; environment variables override
//! individual fields.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dashboard_core::Section;

use crate::api::{DEFAULT_BASE_URL, DEMO_API_KEY};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Quote provider API key
    pub api_key: String,
    /// Quote provider base URL
    pub base_url: String,
    /// Counter sampling interval in milliseconds
    pub frame_interval_ms: u64,
    /// Symbol search to run once the dashboard is mounted
    pub startup_query: Option<String>,
    /// Symbol whose daily series is fetched once at startup
    pub series_symbol: Option<String>,
    /// Navigation entry highlighted on start
    pub section: Section,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            frame_interval_ms: 16,
            startup_query: None,
            series_symbol: None,
            section: Section::default(),
        }
    }
}

impl DashboardConfig {
    /// Get the default config file path.
    ///
    /// Can be overridden with the `FINANCE_DASHBOARD_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("FINANCE_DASHBOARD_CONFIG") {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        directories::ProjectDirs::from("", "", "finance-dashboard")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Load from the default path and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::load_from_path(&Self::default_path())?;
        Ok(config.with_overrides(
            non_empty_var("FINANCE_DASHBOARD_API_KEY"),
            non_empty_var("FINANCE_DASHBOARD_BASE_URL"),
        ))
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    /// Sampling interval for animated counters, never below 1ms.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
