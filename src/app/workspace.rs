//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, the artworks page and the log panel. It
//! also runs the event pump that bridges service events to entity updates.

use gpui::{div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::artworks::ArtworksPage;
use crate::services::TableService;
use crate::state::log_state::LogLevel;
use crate::state::table_state::FetchOutcome;
use crate::theme::colors::GalleryColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    artworks_page: Entity<ArtworksPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));
        // Creating the page issues the page 1 fetch
        let artworks_page = cx.new(|cx| ArtworksPage::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            artworks_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GalleryColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.artworks_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::PageFetched {
            ticket,
            result,
            elapsed_ms,
        } => {
            let Some(service) = cx.try_global::<TableService>().cloned() else {
                tracing::warn!("Page {} resolved without a table service", ticket.page);
                return;
            };
            let outcome = entities.table.update(cx, |table, cx| {
                let outcome = service.settle(table, ticket, result, elapsed_ms);
                if !matches!(outcome, FetchOutcome::Stale(_)) {
                    cx.notify();
                }
                outcome
            });

            let (level, message) = match outcome {
                FetchOutcome::Applied {
                    page,
                    records,
                    total,
                } => (
                    LogLevel::Info,
                    format!("Page {page} loaded: {records} of {total} records"),
                ),
                FetchOutcome::Failed(failure) => (
                    LogLevel::Error,
                    format!("Page {} failed: {}", ticket.page, failure),
                ),
                FetchOutcome::Stale(stale) => {
                    tracing::debug!("Discarded stale page {} (fetch #{})", stale.page, stale.seq);
                    (
                        LogLevel::Debug,
                        format!("Discarded late response for page {}", stale.page),
                    )
                }
            };
            entities.logs.update(cx, |logs, cx| {
                logs.push_now(level, message);
                cx.notify();
            });
        }
    }
}
