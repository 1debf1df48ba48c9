//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set on the artworks page root
pub const TABLE_CONTEXT: &str = "ArtworksTable";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Table actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum TableAction {
    /// Load the next page
    NextPage,
    /// Load the previous page
    PreviousPage,
    /// Reload the last requested page
    Reload,
    /// Select or deselect every row of the page
    TogglePage,
    /// Open or close the "select first N" popover
    ToggleBulkSelect,
    /// Deselect everything
    ClearSelection,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Pagination
        KeyBinding::new("alt-right", TableAction::NextPage, Some(TABLE_CONTEXT)),
        KeyBinding::new("alt-left", TableAction::PreviousPage, Some(TABLE_CONTEXT)),
        KeyBinding::new("secondary-r", TableAction::Reload, Some(TABLE_CONTEXT)),
        // Selection
        KeyBinding::new("secondary-a", TableAction::TogglePage, Some(TABLE_CONTEXT)),
        KeyBinding::new("secondary-n", TableAction::ToggleBulkSelect, Some(TABLE_CONTEXT)),
        KeyBinding::new(
            "secondary-shift-a",
            TableAction::ClearSelection,
            Some(TABLE_CONTEXT),
        ),
    ]
}
