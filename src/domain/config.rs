//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARTWORK_FIELDS, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, FETCH_TIMEOUT_SECS,
    GLOBAL_LOG_CAPACITY, MAX_PAGE_SIZE,
};
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Data source configuration
    pub api: ApiConfig,
    /// Presentation options
    pub ui: UiConfig,
}

/// Artwork API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without the `/artworks` suffix
    pub base_url: String,
    /// Records per page
    pub page_size: u32,
    /// Per-fetch timeout in seconds
    pub timeout_secs: u64,
    /// Fields requested for each record
    pub fields: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: FETCH_TIMEOUT_SECS,
            fields: ARTWORK_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Presentation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the selected-records panel below the table
    pub show_selected_panel: bool,
    /// Log panel ring buffer capacity
    pub log_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_selected_panel: true,
            log_capacity: GLOBAL_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::invalid("api.base_url must not be empty"));
        }
        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid(format!(
                "api.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.api.page_size
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::invalid("api.timeout_secs must be at least 1"));
        }
        Ok(())
    }

    /// Apply a base URL override (from the environment)
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().trim_end_matches('/').to_string();
        }
        self
    }
}
