//! ConfigStore - Local Configuration Storage
//!
//! `config.toml` in the platform configuration directory. A missing file is
//! not an error; the defaults are used and written back so users have a
//! template to edit.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::API_URL_ENV;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE: &str = "config.toml";

/// Path of the configuration file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load configuration from `path`, creating it with defaults if absent
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        if let Err(e) = save_config_to(path, &config) {
            warn!("Could not write default config to {}: {}", path.display(), e);
        }
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

/// Save configuration to `path`
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

/// Load the application configuration
///
/// Falls back to defaults when the file cannot be read or is invalid, then
/// applies the environment override for the API base URL.
pub fn load_app_config() -> (AppConfig, Option<PathBuf>) {
    let (config, source) = match config_path() {
        Ok(path) => match load_config_from(&path) {
            Ok(config) => {
                info!("Config loaded from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
        Err(e) => {
            warn!("No config directory available: {}", e);
            (AppConfig::default(), None)
        }
    };

    let config = config.with_base_url_override(std::env::var(API_URL_ENV).ok());
    (config, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "artworks-table-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::create_dir_all(&dir);
        dir.join(CONFIG_FILE)
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let reloaded = load_config_from(&path).expect("reload");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_saved_values_are_loaded() {
        let path = temp_path("saved");
        let mut config = AppConfig::default();
        config.api.page_size = 30;
        config.ui.show_selected_panel = false;
        save_config_to(&path, &config).expect("save");

        assert_eq!(load_config_from(&path).expect("load"), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_path("invalid");
        fs::write(&path, "[api]\npage_size = \"twelve\"").expect("write");
        assert!(load_config_from(&path).is_err());
    }
}
