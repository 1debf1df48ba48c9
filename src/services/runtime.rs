//! Tokio Runtime Bridge
//!
//! GPUI drives the UI with its own executor, but reqwest needs tokio. Page
//! fetches are spawned here and report back through the event channel.
//!
//! ```text
//! controller ──spawn_named_in_tokio──▶ tokio worker ──AppEvent──▶ event pump
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("artworks-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::trace!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::trace!("Tokio task completed: {}", name);
    });
}
