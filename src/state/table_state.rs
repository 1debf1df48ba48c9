//! TableState - Paginated Remote Selection Table State
//!
//! Owns the displayed page, the loading flag and the selection set. Fetches are
//! tagged with a [`FetchTicket`]; only the most recently issued ticket may change
//! the displayed page, so a slow response for a page the user already left is
//! dropped on arrival.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::artwork::{Artwork, ArtworkId};
use crate::domain::page::{page_count, Page};
use crate::domain::selection::SelectionSet;
use crate::error::{Error, FetchFailure, Result};
use crate::eventing::table_event::SelectionChange;

/// Tag identifying one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// 1-based page requested
    pub page: u32,
    /// Monotonic issue order
    pub seq: u64,
}

/// Loading state of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch outstanding
    #[default]
    Idle,
    /// Waiting for the given fetch
    Loading(FetchTicket),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// What happened when a fetch result was applied
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Page replaced the displayed one
    Applied { page: u32, records: usize, total: u64 },
    /// Latest fetch failed; displayed data untouched
    Failed(FetchFailure),
    /// Result belonged to a superseded fetch and was dropped
    Stale(FetchTicket),
}

/// State of the artworks selection table
#[derive(Debug, Clone)]
pub struct TableState {
    current_page: u32,
    page_size: u32,
    load: LoadState,
    latest: Option<FetchTicket>,
    next_seq: u64,
    page: Page,
    selection: SelectionSet,
    last_error: Option<FetchFailure>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Create an empty table positioned on page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            load: LoadState::Idle,
            latest: None,
            next_seq: 0,
            page: Page::default(),
            selection: SelectionSet::new(),
            last_error: None,
        }
    }

    // ==================== Getters ====================

    /// Page index of the last successfully applied fetch
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Records of the displayed page
    pub fn records(&self) -> &[Artwork] {
        self.page.records()
    }

    pub fn total_records(&self) -> u64 {
        self.page.total()
    }

    pub fn total_pages(&self) -> u32 {
        page_count(self.page.total(), self.page_size)
    }

    /// Page the user most recently asked for (may still be loading or failed)
    pub fn requested_page(&self) -> u32 {
        self.latest.map(|t| t.page).unwrap_or(self.current_page)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.contains(id)
    }

    pub fn last_error(&self) -> Option<&FetchFailure> {
        self.last_error.as_ref()
    }

    /// Every record of a non-empty page is selected
    pub fn is_page_fully_selected(&self) -> bool {
        !self.page.is_empty()
            && self
                .page
                .records()
                .iter()
                .all(|a| self.selection.contains(a.id))
    }

    /// Some, but not all, records of the page are selected
    pub fn is_page_partially_selected(&self) -> bool {
        let selected = self
            .page
            .records()
            .iter()
            .filter(|a| self.selection.contains(a.id))
            .count();
        selected > 0 && selected < self.page.len()
    }

    // ==================== Pagination ====================

    /// Register a fetch for `page` and enter the loading state
    ///
    /// Supersedes any fetch still in flight.
    pub fn begin_fetch(&mut self, page: u32) -> Result<FetchTicket> {
        if page == 0 {
            return Err(Error::invalid("page numbers start at 1"));
        }
        self.next_seq += 1;
        let ticket = FetchTicket {
            page,
            seq: self.next_seq,
        };
        self.latest = Some(ticket);
        self.load = LoadState::Loading(ticket);
        self.last_error = None;
        Ok(ticket)
    }

    /// Apply the resolution of a fetch
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Page, FetchFailure>,
    ) -> FetchOutcome {
        if self.latest != Some(ticket) {
            return FetchOutcome::Stale(ticket);
        }
        self.load = LoadState::Idle;

        match result {
            Ok(page) => {
                let page = page.truncated(self.page_size as usize);
                self.current_page = ticket.page;
                self.page = page;
                FetchOutcome::Applied {
                    page: ticket.page,
                    records: self.page.len(),
                    total: self.page.total(),
                }
            }
            Err(failure) => {
                self.last_error = Some(failure.clone());
                FetchOutcome::Failed(failure)
            }
        }
    }

    /// Target of a "next page" click, if there is one
    pub fn next_page(&self) -> Option<u32> {
        let next = self.current_page + 1;
        (next <= self.total_pages()).then_some(next)
    }

    /// Target of a "previous page" click, if there is one
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    // ==================== Selection ====================

    /// Flip selection of a record; returns true if it is now selected
    pub fn toggle_row_selection(&mut self, artwork: &Artwork) -> bool {
        self.selection.toggle(artwork)
    }

    /// Flip selection of a record by id
    ///
    /// The record is looked up on the displayed page first, then among the
    /// selected records (which may come from pages no longer shown).
    pub fn toggle_row_by_id(&mut self, id: ArtworkId) -> Option<bool> {
        if let Some(artwork) = self.page.records().iter().find(|a| a.id == id) {
            return Some(self.selection.toggle(artwork));
        }
        self.selection.remove(id).map(|_| false)
    }

    /// Select every record on the page, or deselect them all if already selected
    ///
    /// Returns true if the page is now selected.
    pub fn toggle_select_all_on_page(&mut self) -> bool {
        if self.page.is_empty() {
            return false;
        }
        if self.is_page_fully_selected() {
            for artwork in self.page.records() {
                self.selection.remove(artwork.id);
            }
            false
        } else {
            for artwork in self.page.records() {
                self.selection.insert(artwork.clone());
            }
            true
        }
    }

    /// Replace the selection with the first `n` records of the page
    ///
    /// Out-of-range `n` leaves the selection untouched and returns false.
    pub fn select_first_n(&mut self, n: usize) -> bool {
        if n == 0 || n > self.page.len() {
            return false;
        }
        self.selection.replace_with(&self.page.records()[..n]);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Apply a validated selection event; returns true if anything changed
    pub fn apply_selection_change(&mut self, change: SelectionChange) -> bool {
        match change {
            SelectionChange::ToggleRow(id) => self.toggle_row_by_id(id).is_some(),
            SelectionChange::TogglePage => {
                let before = self.selection.len();
                self.toggle_select_all_on_page();
                before != self.selection.len()
            }
            SelectionChange::SelectFirst(n) => self.select_first_n(n),
            SelectionChange::Clear => {
                let changed = !self.selection.is_empty();
                self.clear_selection();
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use pretty_assertions::assert_eq;

    fn make_page(page: u32, len: usize, total: u64) -> Page {
        let base = u64::from(page) * 1000;
        let records = (0..len as u64)
            .map(|i| Artwork::new(base + i, format!("p{page}-r{i}")))
            .collect();
        Page::new(records, total)
    }

    fn loaded(page: u32, len: usize, total: u64) -> TableState {
        let mut state = TableState::new(12);
        let ticket = state.begin_fetch(page).expect("ticket");
        state.complete_fetch(ticket, Ok(make_page(page, len, total)));
        state
    }

    fn network_failure() -> FetchFailure {
        FetchFailure::new(FetchErrorKind::Network, "connection refused")
    }

    #[test]
    fn test_new_state() {
        let state = TableState::new(12);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.total_records(), 0);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_initial_load() {
        let mut state = TableState::new(12);
        let ticket = state.begin_fetch(1).expect("ticket");
        assert!(state.is_loading());

        let outcome = state.complete_fetch(ticket, Ok(make_page(1, 12, 100)));
        assert_eq!(
            outcome,
            FetchOutcome::Applied {
                page: 1,
                records: 12,
                total: 100
            }
        );
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.records().len(), 12);
        assert_eq!(state.total_records(), 100);
        assert_eq!(state.total_pages(), 9);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_go_to_page_updates_index() {
        for p in [1, 2, 7, 9] {
            let state = loaded(p, if p == 9 { 4 } else { 12 }, 100);
            assert_eq!(state.current_page(), p);
            assert!(state.records().len() <= state.page_size() as usize);
        }
    }

    #[test]
    fn test_oversized_page_is_truncated() {
        let state = loaded(1, 20, 100);
        assert_eq!(state.records().len(), 12);
    }

    #[test]
    fn test_page_zero_rejected() {
        let mut state = TableState::new(12);
        assert!(state.begin_fetch(0).is_err());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_loading_keeps_previous_page() {
        let mut state = loaded(1, 12, 100);
        let _ticket = state.begin_fetch(2).expect("ticket");
        assert!(state.is_loading());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.records().len(), 12);
        assert_eq!(state.requested_page(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_data() {
        let mut state = loaded(1, 12, 100);
        let before: Vec<_> = state.records().to_vec();

        let ticket = state.begin_fetch(2).expect("ticket");
        let outcome = state.complete_fetch(ticket, Err(network_failure()));

        assert_eq!(outcome, FetchOutcome::Failed(network_failure()));
        assert_eq!(state.records(), before.as_slice());
        assert_eq!(state.total_records(), 100);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_loading());
        assert_eq!(state.last_error(), Some(&network_failure()));
        assert_eq!(state.requested_page(), 2);
    }

    #[test]
    fn test_new_fetch_clears_error() {
        let mut state = loaded(1, 12, 100);
        let ticket = state.begin_fetch(2).expect("ticket");
        state.complete_fetch(ticket, Err(network_failure()));
        state.begin_fetch(2).expect("retry");
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_stale_response_discarded_when_late() {
        let mut state = loaded(1, 12, 100);
        let t2 = state.begin_fetch(2).expect("ticket");
        let t3 = state.begin_fetch(3).expect("ticket");

        let outcome = state.complete_fetch(t3, Ok(make_page(3, 12, 100)));
        assert!(matches!(outcome, FetchOutcome::Applied { page: 3, .. }));
        let outcome = state.complete_fetch(t2, Ok(make_page(2, 12, 100)));
        assert_eq!(outcome, FetchOutcome::Stale(t2));

        assert_eq!(state.current_page(), 3);
        assert_eq!(state.records()[0].id, ArtworkId(3000));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_discarded_when_early() {
        let mut state = loaded(1, 12, 100);
        let t2 = state.begin_fetch(2).expect("ticket");
        let t3 = state.begin_fetch(3).expect("ticket");

        assert_eq!(
            state.complete_fetch(t2, Ok(make_page(2, 12, 100))),
            FetchOutcome::Stale(t2)
        );
        assert!(state.is_loading());
        assert_eq!(state.current_page(), 1);

        state.complete_fetch(t3, Ok(make_page(3, 12, 100)));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.records()[0].id, ArtworkId(3000));
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut state = loaded(1, 12, 100);
        let t2 = state.begin_fetch(2).expect("ticket");
        let t3 = state.begin_fetch(3).expect("ticket");
        state.complete_fetch(t3, Ok(make_page(3, 12, 100)));
        state.complete_fetch(t2, Err(network_failure()));
        assert!(state.last_error().is_none());
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_same_page_reissued_only_latest_applies() {
        let mut state = loaded(1, 12, 100);
        let first = state.begin_fetch(2).expect("ticket");
        let second = state.begin_fetch(2).expect("ticket");
        assert_eq!(
            state.complete_fetch(first, Ok(make_page(2, 12, 100))),
            FetchOutcome::Stale(first)
        );
        assert!(state.is_loading());
        state.complete_fetch(second, Ok(make_page(2, 12, 100)));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_next_and_previous() {
        let state = loaded(1, 12, 100);
        assert_eq!(state.previous_page(), None);
        assert_eq!(state.next_page(), Some(2));

        let state = loaded(9, 4, 100);
        assert_eq!(state.next_page(), None);
        assert_eq!(state.previous_page(), Some(8));
    }

    #[test]
    fn test_toggle_row_twice_is_identity() {
        let mut state = loaded(1, 12, 100);
        state.select_first_n(3);
        let before = state.selection().ids();
        let row = state.records()[7].clone();

        assert!(state.toggle_row_selection(&row));
        assert!(!state.toggle_row_selection(&row));
        assert_eq!(state.selection().ids(), before);
    }

    #[test]
    fn test_selection_survives_page_change() {
        let mut state = loaded(1, 12, 100);
        let row = state.records()[0].clone();
        state.toggle_row_selection(&row);

        let ticket = state.begin_fetch(2).expect("ticket");
        state.complete_fetch(ticket, Ok(make_page(2, 12, 100)));
        assert!(state.is_selected(row.id));

        // Off-page record can still be deselected by id
        assert_eq!(state.toggle_row_by_id(row.id), Some(false));
        assert!(state.selection().is_empty());
        assert_eq!(state.toggle_row_by_id(ArtworkId(424242)), None);
    }

    #[test]
    fn test_toggle_select_all_on_page() {
        let mut state = loaded(1, 12, 100);
        let off_page = Artwork::new(77, "kept");
        state.toggle_row_selection(&off_page);

        assert!(state.toggle_select_all_on_page());
        assert_eq!(state.selection().len(), 13);
        assert!(state.is_page_fully_selected());

        assert!(!state.toggle_select_all_on_page());
        assert_eq!(state.selection().ids(), vec![ArtworkId(77)]);
    }

    #[test]
    fn test_toggle_select_all_from_partial() {
        let mut state = loaded(1, 12, 100);
        state.select_first_n(4);
        assert!(state.is_page_partially_selected());
        assert!(state.toggle_select_all_on_page());
        assert!(state.is_page_fully_selected());
        assert!(!state.is_page_partially_selected());
    }

    #[test]
    fn test_toggle_select_all_on_empty_page() {
        let mut state = TableState::new(12);
        assert!(!state.toggle_select_all_on_page());
        assert!(state.selection().is_empty());
        assert!(!state.is_page_fully_selected());
    }

    #[test]
    fn test_select_first_n() {
        let mut state = loaded(1, 12, 100);
        state.toggle_row_selection(&Artwork::new(5, "elsewhere"));

        assert!(state.select_first_n(5));
        let expected: Vec<_> = state.records()[..5].iter().map(|a| a.id).collect();
        assert_eq!(state.selection().ids(), expected);

        assert!(!state.select_first_n(0));
        assert_eq!(state.selection().ids(), expected);

        assert!(!state.select_first_n(13));
        assert_eq!(state.selection().ids(), expected);

        assert!(state.select_first_n(12));
        assert_eq!(state.selection().len(), 12);
    }

    #[test]
    fn test_select_first_n_on_empty_page() {
        let mut state = TableState::new(12);
        assert!(!state.select_first_n(1));
    }

    #[test]
    fn test_apply_selection_change() {
        let mut state = loaded(1, 12, 100);
        let first = state.records()[0].id;

        assert!(state.apply_selection_change(SelectionChange::ToggleRow(first)));
        assert!(state.is_selected(first));
        assert!(state.apply_selection_change(SelectionChange::TogglePage));
        assert!(state.is_page_fully_selected());
        assert!(state.apply_selection_change(SelectionChange::SelectFirst(2)));
        assert_eq!(state.selection().len(), 2);
        assert!(!state.apply_selection_change(SelectionChange::SelectFirst(50)));
        assert!(state.apply_selection_change(SelectionChange::Clear));
        assert!(!state.apply_selection_change(SelectionChange::Clear));
    }
}
