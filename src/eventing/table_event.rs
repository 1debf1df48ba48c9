//! Table Events - Validated Page and Selection Changes
//!
//! Pagination buttons and checkboxes produce loosely typed values (a clicked
//! page number, a row id). They are converted here before they reach [`TableState`](crate::state::table_state::TableState).

use crate::domain::artwork::ArtworkId;
use crate::error::{Error, Result};

/// Request to display a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    page: u32,
}

impl PageChange {
    /// Validate a 1-based page against the known page count
    ///
    /// `total_pages` of `None` means the count is not known yet (nothing has
    /// loaded), in which case only the lower bound is checked.
    pub fn new(page: u32, total_pages: Option<u32>) -> Result<Self> {
        if page == 0 {
            return Err(Error::invalid("page numbers start at 1"));
        }
        if let Some(total) = total_pages {
            if page > total {
                return Err(Error::invalid(format!(
                    "page {page} is beyond the last page ({total})"
                )));
            }
        }
        Ok(Self { page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A change to the selection set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Row checkbox or selected-panel remove button
    ToggleRow(ArtworkId),
    /// Header checkbox
    TogglePage,
    /// Bulk-select submit
    SelectFirst(usize),
    /// Clear button
    Clear,
}

impl SelectionChange {
    pub fn describe(&self) -> String {
        match self {
            SelectionChange::ToggleRow(id) => format!("toggle artwork {id}"),
            SelectionChange::TogglePage => "toggle page".to_string(),
            SelectionChange::SelectFirst(n) => format!("select first {n}"),
            SelectionChange::Clear => "clear selection".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_change_bounds() {
        assert!(PageChange::new(0, None).is_err());
        assert_eq!(PageChange::new(5, None).map(|p| p.page()).ok(), Some(5));
        assert_eq!(PageChange::new(9, Some(9)).map(|p| p.page()).ok(), Some(9));
        assert!(PageChange::new(10, Some(9)).is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(SelectionChange::SelectFirst(4).describe(), "select first 4");
        assert_eq!(SelectionChange::ToggleRow(ArtworkId(27992)).describe(), "toggle artwork 27992");
    }
}
