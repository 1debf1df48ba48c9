//! ConfigState - Application Configuration State

use std::path::PathBuf;

use crate::domain::config::AppConfig;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AppConfig, source: Option<PathBuf>) -> Self {
        Self { config, source }
    }

    /// Host part of the API base URL, for display
    pub fn api_host(&self) -> &str {
        let url = self.config.api.base_url.as_str();
        let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_host() {
        let state = ConfigState::default();
        assert_eq!(state.api_host(), "api.artic.edu");

        let mut config = AppConfig::default();
        config.api.base_url = "localhost:9000".to_string();
        assert_eq!(ConfigState::new(config, None).api_host(), "localhost:9000");
    }
}
