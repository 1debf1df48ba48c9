//! File System Utilities
//!
//! Platform directories for the configuration file and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const QUALIFIER: &str = "io.github";
const ORGANIZATION: &str = "artworks-table";
const APPLICATION: &str = "artworks-table";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| Error::invalid("Could not determine project directories"))
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/artworks-table/`
/// - **macOS**: `~/Library/Application Support/io.github.artworks-table.artworks-table/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\artworks-table\artworks-table\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

/// Get or create the directory holding rolling log files
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let log_dir = dirs.data_local_dir().join("logs");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }
    Ok(log_dir)
}
