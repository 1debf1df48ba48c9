//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: table data changes per fetch, the
//! bulk-select popover per keystroke.

use std::path::PathBuf;

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::state::{
    bulk_select_state::BulkSelectState, config_state::ConfigState, log_state::LogState,
    table_state::TableState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Page, loading flag and selection
    pub table: Entity<TableState>,
    /// "Select first N" popover
    pub bulk_select: Entity<BulkSelectState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, source: Option<PathBuf>, cx: &mut App) -> Self {
        let page_size = config.api.page_size;
        let log_capacity = config.ui.log_capacity;

        Self {
            config: cx.new(|_| ConfigState::new(config, source)),
            table: cx.new(|_| TableState::new(page_size)),
            bulk_select: cx.new(|_| BulkSelectState::default()),
            logs: cx.new(|_| LogState::new(log_capacity)),
        }
    }
}
