//! Artworks Controller
//!
//! Turns page clicks, checkbox clicks and bulk-select input into table state
//! changes and page fetches.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::eventing::table_event::{PageChange, SelectionChange};
use crate::services::TableService;

/// What a key press means to the bulk-select popover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkKey {
    Digit(char),
    Backspace,
    Submit,
    Close,
    Ignore,
}

impl BulkKey {
    /// Classify a keystroke by its key name
    pub fn from_key(key: &str) -> Self {
        match key {
            "enter" => BulkKey::Submit,
            "escape" => BulkKey::Close,
            "backspace" => BulkKey::Backspace,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => BulkKey::Digit(c),
                    _ => BulkKey::Ignore,
                }
            }
        }
    }
}

/// Artworks page controller
#[derive(Clone)]
pub struct ArtworksController {
    entities: AppEntities,
}

impl ArtworksController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn log(&self, event: AppEvent, cx: &App) {
        if let Some(service) = cx.try_global::<TableService>() {
            service.log(event);
        }
    }

    // ==================== Pagination ====================

    /// Fetch the first page when the view is created
    pub fn load_initial(&self, cx: &mut App) {
        match PageChange::new(1, None) {
            Ok(change) => self.fetch(change, cx),
            Err(e) => tracing::error!("Initial page rejected: {}", e),
        }
    }

    /// Navigate to a 1-based page from the pagination bar
    pub fn go_to_page(&self, page: u32, cx: &mut App) {
        let total_pages = self.entities.table.read(cx).total_pages();
        match PageChange::new(page, Some(total_pages)) {
            Ok(change) => self.fetch(change, cx),
            Err(e) => self.log(AppEvent::warn(format!("Ignored page change: {e}")), cx),
        }
    }

    pub fn next_page(&self, cx: &mut App) {
        if let Some(page) = self.entities.table.read(cx).next_page() {
            self.go_to_page(page, cx);
        }
    }

    pub fn previous_page(&self, cx: &mut App) {
        if let Some(page) = self.entities.table.read(cx).previous_page() {
            self.go_to_page(page, cx);
        }
    }

    /// Re-request the page that was asked for last (the failed one after an error)
    pub fn retry(&self, cx: &mut App) {
        let page = self.entities.table.read(cx).requested_page();
        match PageChange::new(page, None) {
            Ok(change) => self.fetch(change, cx),
            Err(e) => self.log(AppEvent::warn(format!("Retry rejected: {e}")), cx),
        }
    }

    fn fetch(&self, change: PageChange, cx: &mut App) {
        let Some(service) = cx.try_global::<TableService>().cloned() else {
            tracing::error!("TableService is not installed");
            return;
        };

        let ticket = self.entities.table.update(cx, |table, cx| {
            let ticket = table.begin_fetch(change.page());
            cx.notify();
            ticket
        });

        match ticket {
            Ok(ticket) => {
                service.log(AppEvent::debug(format!("Loading page {}", ticket.page)));
                service.request_page(ticket);
            }
            Err(e) => service.log(AppEvent::warn(format!("Fetch not started: {e}"))),
        }
    }

    // ==================== Selection ====================

    /// Apply a selection change and report it
    pub fn apply_selection(&self, change: SelectionChange, cx: &mut App) {
        let (changed, count) = self.entities.table.update(cx, |table, cx| {
            let changed = table.apply_selection_change(change);
            if changed {
                cx.notify();
            }
            (changed, table.selection().len())
        });

        if changed {
            tracing::debug!("Selection: {} ({} selected)", change.describe(), count);
            self.log(
                AppEvent::info(format!("{} → {} selected", change.describe(), count)),
                cx,
            );
        } else if let SelectionChange::SelectFirst(n) = change {
            let available = self.entities.table.read(cx).records().len();
            self.log(
                AppEvent::debug(format!(
                    "Select first {n} ignored; the page has {available} rows"
                )),
                cx,
            );
        }
    }

    // ==================== Bulk select ====================

    pub fn toggle_bulk_select(&self, cx: &mut App) {
        self.entities.bulk_select.update(cx, |bulk, cx| {
            bulk.toggle();
            cx.notify();
        });
    }

    pub fn close_bulk_select(&self, cx: &mut App) {
        self.entities.bulk_select.update(cx, |bulk, cx| {
            bulk.close();
            cx.notify();
        });
    }

    /// Value chosen from the picker
    pub fn pick_bulk_count(&self, n: usize, cx: &mut App) {
        self.entities.bulk_select.update(cx, |bulk, cx| {
            bulk.pick(n);
            cx.notify();
        });
    }

    /// Handle a key press while the popover has focus
    pub fn bulk_key(&self, key: &str, cx: &mut App) {
        match BulkKey::from_key(key) {
            BulkKey::Digit(c) => self.entities.bulk_select.update(cx, |bulk, cx| {
                if bulk.push_digit(c) {
                    cx.notify();
                }
            }),
            BulkKey::Backspace => self.entities.bulk_select.update(cx, |bulk, cx| {
                bulk.backspace();
                cx.notify();
            }),
            BulkKey::Submit => self.submit_bulk_select(cx),
            BulkKey::Close => self.close_bulk_select(cx),
            BulkKey::Ignore => {}
        }
    }

    /// Replace the selection with the first N rows and close the popover
    pub fn submit_bulk_select(&self, cx: &mut App) {
        let value = self.entities.bulk_select.update(cx, |bulk, cx| {
            let value = bulk.submit();
            cx.notify();
            value
        });
        self.apply_selection(SelectionChange::SelectFirst(value.unwrap_or(0)), cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_key_classification() {
        assert_eq!(BulkKey::from_key("enter"), BulkKey::Submit);
        assert_eq!(BulkKey::from_key("escape"), BulkKey::Close);
        assert_eq!(BulkKey::from_key("backspace"), BulkKey::Backspace);
        assert_eq!(BulkKey::from_key("7"), BulkKey::Digit('7'));
        assert_eq!(BulkKey::from_key("a"), BulkKey::Ignore);
        assert_eq!(BulkKey::from_key("f1"), BulkKey::Ignore);
        assert_eq!(BulkKey::from_key(""), BulkKey::Ignore);
    }
}
