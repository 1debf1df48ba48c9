//! Log Panel Component
//!
//! Displays application logs at the bottom of the screen.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::log_state::LogEntry;
use crate::theme::colors::GalleryColors;
use crate::utils::format::format_time_ms;

/// Entries rendered at once
const VISIBLE_ENTRIES: usize = 80;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        active: bool,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(if active {
                GalleryColors::text_light()
            } else {
                GalleryColors::text_muted()
            })
            .when(active, |el| el.bg(gpui::rgba(0xffffff22)))
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .child(label.into())
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        let time = format_time_ms(&entry.timestamp);

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(GalleryColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(time),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(GalleryColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.read(cx);
        let problems = logs.problem_count();
        let problems_only = logs.problems_only;
        let count = logs.len();

        let height = if self.expanded { px(160.0) } else { px(32.0) };

        let clear_entities = self.entities.clone();
        let filter_entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(GalleryColors::log_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(GalleryColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Activity"),
                            )
                            .child(
                                div()
                                    .text_color(GalleryColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            )
                            .when(problems > 0, |el| {
                                el.child(
                                    div()
                                        .px_1()
                                        .rounded_sm()
                                        .bg(GalleryColors::danger())
                                        .text_color(GalleryColors::text_light())
                                        .text_size(px(10.0))
                                        .child(problems.to_string()),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Self::header_button("filter-logs", "Problems only", problems_only)
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        filter_entities.logs.update(cx, |logs, cx| {
                                            logs.toggle_problems_only();
                                            cx.notify();
                                        });
                                    }),
                            )
                            .child(
                                Self::header_button("clear-logs", "Clear", false).on_click(
                                    move |_event: &ClickEvent, _window, cx| {
                                        clear_entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    },
                                ),
                            )
                            .child(
                                Self::header_button(
                                    "toggle-logs",
                                    if self.expanded { "▼" } else { "▲" },
                                    false,
                                )
                                .on_click(cx.listener(
                                    |this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    },
                                )),
                            ),
                    ),
            );

        // Log entries (only when expanded)
        if self.expanded {
            let entries = self.entities.logs.read(cx).visible(VISIBLE_ENTRIES);

            panel = panel.child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries.into_iter().map(|entry| self.render_log_entry(entry))),
            );
        }

        panel
    }
}
