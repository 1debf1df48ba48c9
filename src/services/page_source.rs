//! PageSource Trait
//!
//! Abstraction over the remote paginated data source so the table can be
//! driven by the live API or by an in-memory source in tests.

use futures::future::BoxFuture;

use crate::domain::page::Page;
use crate::error::Result;

/// A remote source of artwork pages
pub trait PageSource: Send + Sync + 'static {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Fetch the 1-based `page` holding at most `page_size` records
    ///
    /// The returned future owns everything it needs so it can be moved onto
    /// the I/O runtime.
    fn fetch_page(&self, page: u32, page_size: u32) -> BoxFuture<'static, Result<Page>>;
}

#[cfg(test)]
pub mod testing {
    //! In-memory sources for service and controller tests

    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    use futures::FutureExt;
    use parking_lot::Mutex;

    use super::*;
    use crate::domain::artwork::Artwork;
    use crate::error::Error;

    /// Serves `total` synthetic records, with optional per-page delays and failures
    #[derive(Clone, Default)]
    pub struct MemorySource {
        pub total: u64,
        delays: Arc<Mutex<HashMap<u32, Duration>>>,
        failing: Arc<Mutex<HashMap<u32, fn() -> Error>>>,
        calls: Arc<Mutex<Vec<(u32, u32)>>>,
    }

    impl MemorySource {
        pub fn new(total: u64) -> Self {
            Self {
                total,
                ..Default::default()
            }
        }

        pub fn delay_page(&self, page: u32, delay: Duration) {
            self.delays.lock().insert(page, delay);
        }

        pub fn fail_page(&self, page: u32, error: fn() -> Error) {
            self.failing.lock().insert(page, error);
        }

        /// `(page, page_size)` of every request so far
        pub fn calls(&self) -> Vec<(u32, u32)> {
            self.calls.lock().clone()
        }

        pub fn build_page(total: u64, page: u32, page_size: u32) -> Page {
            let start = u64::from(page.saturating_sub(1)) * u64::from(page_size);
            let end = (start + u64::from(page_size)).min(total);
            let records = (start..end)
                .map(|i| Artwork::new(i + 1, format!("Artwork {}", i + 1)))
                .collect();
            Page::new(records, total)
        }
    }

    impl PageSource for MemorySource {
        fn name(&self) -> &str {
            "memory"
        }

        fn fetch_page(&self, page: u32, page_size: u32) -> BoxFuture<'static, Result<Page>> {
            self.calls.lock().push((page, page_size));
            let delay = self.delays.lock().get(&page).copied();
            let failure = self.failing.lock().get(&page).copied();
            let total = self.total;

            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                match failure {
                    Some(make_error) => Err(make_error()),
                    None => Ok(Self::build_page(total, page, page_size)),
                }
            }
            .boxed()
        }
    }
}
