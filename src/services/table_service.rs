//! TableService - Page Fetching Service
//!
//! Issues page fetches on the tokio runtime, bounds them with a timeout and
//! reports each resolution to the UI as an [`AppEvent::PageFetched`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use gpui::Global;
use parking_lot::Mutex;

use crate::domain::page::Page;
use crate::error::{Error, FetchFailure, Result};
use crate::eventing::app_event::AppEvent;
use crate::services::page_source::PageSource;
use crate::services::runtime::spawn_named_in_tokio;
use crate::state::table_state::{FetchOutcome, FetchTicket, TableState};

/// Running counters shown in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub issued: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Duration of the most recent applied or failed fetch
    pub last_latency_ms: Option<u64>,
}

/// Service that owns the data source and the UI event sender
#[derive(Clone)]
pub struct TableService {
    source: Arc<dyn PageSource>,
    event_tx: flume::Sender<AppEvent>,
    page_size: u32,
    timeout: Duration,
    stats: Arc<Mutex<FetchStats>>,
}

impl Global for TableService {}

impl TableService {
    /// Create a new service
    pub fn new(
        source: Arc<dyn PageSource>,
        event_tx: flume::Sender<AppEvent>,
        page_size: u32,
        timeout: Duration,
    ) -> Self {
        let service = Self {
            source,
            event_tx,
            page_size,
            timeout,
            stats: Arc::new(Mutex::new(FetchStats::default())),
        };
        service.log(AppEvent::debug(format!(
            "TableService ready ({}, {} records per page)",
            service.source.name(),
            page_size
        )));
        service
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn stats(&self) -> FetchStats {
        *self.stats.lock()
    }

    /// Fetch the ticket's page in the background
    ///
    /// Exactly one `PageFetched` event is sent per call, success or failure.
    pub fn request_page(&self, ticket: FetchTicket) {
        tracing::info!("Requesting page {} (fetch #{})", ticket.page, ticket.seq);
        self.stats.lock().issued += 1;

        let source = self.source.clone();
        let event_tx = self.event_tx.clone();
        let page_size = self.page_size;
        let timeout = self.timeout;

        spawn_named_in_tokio("fetch-page", async move {
            let started = Instant::now();
            let result = fetch_with_timeout(source.as_ref(), ticket.page, page_size, timeout).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let result = result.map_err(|e| {
                tracing::warn!("Fetch of page {} failed: {}", ticket.page, e);
                FetchFailure::from(e)
            });
            if let Ok(page) = &result {
                tracing::debug!(
                    "Page {} arrived in {} ms ({} records)",
                    ticket.page,
                    elapsed_ms,
                    page.len()
                );
            }

            let _ = event_tx.send(AppEvent::PageFetched {
                ticket,
                result,
                elapsed_ms,
            });
        });
    }

    /// Hand a resolved fetch to the table and count it
    ///
    /// Stale resolutions leave the counters untouched.
    pub fn settle(
        &self,
        state: &mut TableState,
        ticket: FetchTicket,
        result: std::result::Result<Page, FetchFailure>,
        elapsed_ms: u64,
    ) -> FetchOutcome {
        let outcome = state.complete_fetch(ticket, result);
        let mut stats = self.stats.lock();
        match outcome {
            FetchOutcome::Applied { .. } => stats.succeeded += 1,
            FetchOutcome::Failed(_) => stats.failed += 1,
            FetchOutcome::Stale(_) => {}
        }
        if !matches!(outcome, FetchOutcome::Stale(_)) {
            stats.last_latency_ms = Some(elapsed_ms);
        }
        outcome
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Run one fetch, converting an expired deadline into [`Error::Timeout`]
pub async fn fetch_with_timeout(
    source: &dyn PageSource,
    page: u32,
    page_size: u32,
    timeout: Duration,
) -> Result<Page> {
    match tokio::time::timeout(timeout, source.fetch_page(page, page_size)).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            secs: timeout.as_secs().max(1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use crate::services::page_source::testing::MemorySource;

    fn service(source: MemorySource) -> (TableService, flume::Receiver<AppEvent>) {
        let (tx, rx) = flume::unbounded();
        let service = TableService::new(Arc::new(source), tx, 12, Duration::from_secs(2));
        (service, rx)
    }

    type Resolution = (FetchTicket, std::result::Result<Page, FetchFailure>, u64);

    /// Next `PageFetched` event, skipping log events
    fn next_fetch(rx: &flume::Receiver<AppEvent>) -> Resolution {
        loop {
            match rx.recv_timeout(Duration::from_secs(5)) {
                Ok(AppEvent::PageFetched {
                    ticket,
                    result,
                    elapsed_ms,
                }) => return (ticket, result, elapsed_ms),
                Ok(AppEvent::Log { .. }) => continue,
                Err(e) => panic!("no fetch event: {e}"),
            }
        }
    }

    #[test]
    fn test_initial_load_end_to_end() {
        let source = MemorySource::new(100);
        let (service, rx) = service(source.clone());
        let mut state = TableState::new(service.page_size());

        let ticket = state.begin_fetch(1).expect("ticket");
        service.request_page(ticket);
        let (got, result, elapsed_ms) = next_fetch(&rx);
        assert_eq!(got, ticket);

        service.settle(&mut state, got, result, elapsed_ms);
        assert_eq!(source.calls(), vec![(1, 12)]);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.records().len(), 12);
        assert_eq!(state.total_records(), 100);
        assert!(!state.is_loading());
        assert_eq!(service.stats().succeeded, 1);
    }

    #[test]
    fn test_late_stale_response_is_dropped() {
        let source = MemorySource::new(100);
        source.delay_page(2, Duration::from_millis(300));
        let (service, rx) = service(source);
        let mut state = TableState::new(12);

        let t2 = state.begin_fetch(2).expect("ticket");
        service.request_page(t2);
        let t3 = state.begin_fetch(3).expect("ticket");
        service.request_page(t3);

        let (first, result, elapsed_ms) = next_fetch(&rx);
        assert_eq!(first, t3);
        assert!(matches!(
            service.settle(&mut state, first, result, elapsed_ms),
            FetchOutcome::Applied { page: 3, .. }
        ));

        let (second, result, _) = next_fetch(&rx);
        assert_eq!(second, t2);
        assert_eq!(service.settle(&mut state, second, result, 9_999), FetchOutcome::Stale(t2));
        assert_eq!(service.stats().succeeded, 1);
        assert_ne!(service.stats().last_latency_ms, Some(9_999));

        assert_eq!(state.current_page(), 3);
        assert_eq!(state.records()[0].title(), "Artwork 25");
    }

    #[test]
    fn test_failure_keeps_displayed_page() {
        let source = MemorySource::new(100);
        source.fail_page(2, || Error::HttpStatus {
            status: 503,
            url: "memory://artworks?page=2".to_string(),
        });
        let (service, rx) = service(source);
        let mut state = TableState::new(12);

        let t1 = state.begin_fetch(1).expect("ticket");
        service.request_page(t1);
        let (ticket, result, elapsed_ms) = next_fetch(&rx);
        service.settle(&mut state, ticket, result, elapsed_ms);
        let before = state.records().to_vec();

        let t2 = state.begin_fetch(2).expect("ticket");
        service.request_page(t2);
        let (ticket, result, elapsed_ms) = next_fetch(&rx);
        let outcome = service.settle(&mut state, ticket, result, elapsed_ms);

        assert!(matches!(outcome, FetchOutcome::Failed(ref f) if f.kind == FetchErrorKind::Network));
        assert_eq!(state.records(), before.as_slice());
        assert_eq!(state.total_records(), 100);
        assert!(!state.is_loading());
        assert_eq!(service.stats().failed, 1);
    }

    #[test]
    fn test_superseded_failure_is_not_counted() {
        let source = MemorySource::new(100);
        source.delay_page(2, Duration::from_millis(300));
        source.fail_page(2, || Error::HttpStatus {
            status: 500,
            url: "memory://artworks?page=2".to_string(),
        });
        let (service, rx) = service(source);
        let mut state = TableState::new(12);

        let t2 = state.begin_fetch(2).expect("ticket");
        service.request_page(t2);
        let t3 = state.begin_fetch(3).expect("ticket");
        service.request_page(t3);

        let (ticket, result, applied_ms) = next_fetch(&rx);
        assert_eq!(ticket, t3);
        service.settle(&mut state, ticket, result, applied_ms);

        let (ticket, result, elapsed_ms) = next_fetch(&rx);
        assert_eq!(ticket, t2);
        assert_eq!(
            service.settle(&mut state, ticket, result, elapsed_ms),
            FetchOutcome::Stale(t2)
        );

        assert!(state.last_error().is_none());
        assert_eq!(
            service.stats(),
            FetchStats {
                issued: 2,
                succeeded: 1,
                failed: 0,
                last_latency_ms: Some(applied_ms),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_with_timeout_expires() {
        let source = MemorySource::new(100);
        source.delay_page(1, Duration::from_millis(500));
        let err = fetch_with_timeout(&source, 1, 12, Duration::from_millis(50))
            .await
            .expect_err("should time out");
        assert!(matches!(err, Error::Timeout { .. }));
        assert_eq!(err.kind(), FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_fetch_with_timeout_passes_result() {
        let source = MemorySource::new(20);
        let page = fetch_with_timeout(&source, 2, 12, Duration::from_secs(1))
            .await
            .expect("page");
        assert_eq!(page.len(), 8);
        assert_eq!(page.total(), 20);
    }
}
