//! Service Layer
//!
//! The service layer wraps the remote artwork API and runs fetches on a tokio
//! runtime, reporting results back to the UI as events.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  TableService                    │
//! │  ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │ dyn PageSource   │   │ tokio runtime       │  │
//! │  │ (ArticClient)    │   │ (fetch + timeout)   │  │
//! │  └──────────────────┘   └─────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//!                         │
//!                         ▼ AppEvent::PageFetched
//! ┌──────────────────────────────────────────────────┐
//! │          Event pump → TableState entity          │
//! └──────────────────────────────────────────────────┘
//! ```

mod artic_client;
mod page_source;
mod runtime;
mod table_service;

pub use artic_client::*;
pub use page_source::*;
pub use runtime::*;
pub use table_service::*;
