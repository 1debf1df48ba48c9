//! Header Component
//!
//! The application header with title, selection count and fetch status.

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::services::TableService;
use crate::state::table_state::LoadState;
use crate::theme::colors::GalleryColors;
use crate::utils::format::format_number;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.table, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_badge(label: impl Into<gpui::SharedString>, value: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .px_2()
            .py_1()
            .rounded_md()
            .bg(gpui::rgba(0xffffff1f))
            .child(
                div()
                    .text_color(gpui::rgba(0xffffffaa))
                    .text_size(px(11.0))
                    .child(label.into()),
            )
            .child(
                div()
                    .text_color(GalleryColors::text_header())
                    .text_size(px(12.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(value),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let table = self.entities.table.read(cx);
        let selected = table.selection().len();
        let fetching = match table.load_state() {
            LoadState::Loading(ticket) => Some(ticket.page),
            LoadState::Idle => None,
        };
        let page = format!("{} / {}", table.current_page(), table.total_pages());
        let host = self.entities.config.read(cx).api_host().to_string();

        let stats = cx.try_global::<TableService>().map(|service| service.stats());
        let latency = stats
            .and_then(|s| s.last_latency_ms)
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "–".to_string());
        let failed = stats.map(|s| s.failed).unwrap_or_default();

        let status_color = if fetching.is_some() {
            GalleryColors::warning()
        } else {
            GalleryColors::success()
        };
        let host = match fetching {
            Some(page) => format!("{host} · loading page {page}"),
            None => host,
        };

        div()
            .h(px(48.0))
            .w_full()
            .bg(GalleryColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: mark and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffe6))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(GalleryColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("A"),
                    )
                    .child(
                        div()
                            .text_color(GalleryColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Artworks"),
                    ),
            )
            // Right side: counters and source
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Self::render_badge("Selected", format_number(selected as u64)))
                    .child(Self::render_badge("Page", page))
                    .child(Self::render_badge("Latency", latency))
                    .when(failed > 0, |el| {
                        el.child(Self::render_badge("Failed", format_number(failed)))
                    })
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_color(status_color)
                                    .text_size(px(10.0))
                                    .child("●"),
                            )
                            .child(
                                div()
                                    .text_color(GalleryColors::text_header())
                                    .text_size(px(12.0))
                                    .child(host),
                            ),
                    ),
            )
    }
}
