//! Pagination Component
//!
//! Page navigation for the DataTable: first, previous, a window of page
//! numbers, next and last.

use std::ops::RangeInclusive;
use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;
use crate::utils::format::format_number;

type PageHandler = Rc<dyn Fn(u32, &mut Window, &mut App)>;

/// Page numbers to show around `current`, `span` wide and clamped to the range
pub fn page_window(current: u32, total_pages: u32, span: u32) -> RangeInclusive<u32> {
    let total = total_pages.max(1);
    let span = span.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(span / 2).max(1);
    let start = start.min(total - span + 1);
    start..=start + span - 1
}

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    window_span: u32,
    disabled: bool,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: u32, total_pages: u32, total_items: u64) -> Self {
        Self {
            current_page,
            total_pages: total_pages.max(1),
            total_items,
            window_span: 5,
            disabled: false,
            on_page_change: None,
        }
    }

    /// Number of page buttons in the numbered window
    pub fn window_span(mut self, span: u32) -> Self {
        self.window_span = span.max(1);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(u32, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn page_button(
        &self,
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        target: Option<u32>,
        active: bool,
    ) -> impl IntoElement {
        let label: SharedString = label.into();
        let enabled = target.is_some() && !self.disabled;
        let handler = self.on_page_change.clone().filter(|_| enabled);

        let mut btn = div()
            .id(id.into())
            .min_w_8()
            .px_2()
            .py_1()
            .rounded_sm()
            .flex()
            .justify_center()
            .text_sm()
            .child(label);

        btn = if active {
            btn.bg(GalleryColors::accent())
                .text_color(GalleryColors::text_light())
        } else if enabled {
            btn.text_color(GalleryColors::text_primary())
                .cursor_pointer()
                .hover(|s| s.bg(GalleryColors::table_row_hover()))
        } else {
            btn.text_color(GalleryColors::text_muted())
        };

        btn.when_some(handler.zip(target), |el, (handler, page)| {
            el.on_click(move |_, window, cx| handler(page, window, cx))
        })
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let prev = (current > 1).then(|| current - 1);
        let next = (current < total).then(|| current + 1);

        let numbered: Vec<_> = page_window(current, total, self.window_span)
            .map(|page| {
                self.page_button(
                    ElementId::Name(format!("page-{page}").into()),
                    page.to_string(),
                    (page != current).then_some(page),
                    page == current,
                )
                .into_any_element()
            })
            .collect();

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(GalleryColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_secondary())
                    .child(format!("{} records", format_number(self.total_items))),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.page_button("first-page", "«", prev.map(|_| 1), false))
                    .child(self.page_button("prev-page", "‹", prev, false))
                    .children(numbered)
                    .child(self.page_button("next-page", "›", next, false))
                    .child(self.page_button("last-page", "»", next.map(|_| total), false)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_centers_on_current() {
        assert_eq!(page_window(5, 9, 5), 3..=7);
        assert_eq!(page_window(4, 9, 3), 3..=5);
    }

    #[test]
    fn test_page_window_clamps_to_edges() {
        assert_eq!(page_window(1, 9, 5), 1..=5);
        assert_eq!(page_window(2, 9, 5), 1..=5);
        assert_eq!(page_window(9, 9, 5), 5..=9);
        assert_eq!(page_window(8, 9, 5), 5..=9);
    }

    #[test]
    fn test_page_window_with_few_pages() {
        assert_eq!(page_window(1, 1, 5), 1..=1);
        assert_eq!(page_window(2, 3, 5), 1..=3);
        assert_eq!(page_window(1, 0, 5), 1..=1);
    }

    #[test]
    fn test_page_window_out_of_range_current() {
        assert_eq!(page_window(0, 9, 5), 1..=5);
        assert_eq!(page_window(40, 9, 5), 5..=9);
    }
}
