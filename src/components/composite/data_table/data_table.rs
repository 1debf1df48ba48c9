//! DataTable Component
//!
//! A data table with a leading checkbox column. Selection lives with the
//! owner; the table only reports row and header toggles.

use std::rc::Rc;

use ahash::AHashSet;
use gpui::{
    div, prelude::*, px, relative, App, Context, ElementId, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::components::primitives::checkbox::Checkbox;
use crate::theme::colors::GalleryColors;

const CHECKBOX_COLUMN_WIDTH: f32 = 48.0;

/// Rows must expose a stable identifier
pub trait TableRow: Clone + 'static {
    fn row_id(&self) -> u64;
}

/// Handler receiving a row id
pub type RowHandler = Rc<dyn Fn(u64, &mut Window, &mut App)>;
/// Handler for header level actions
pub type HeaderHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// DataTable component
pub struct DataTable<R: TableRow> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    selected: AHashSet<u64>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    on_toggle_row: Option<RowHandler>,
    on_toggle_page: Option<HeaderHandler>,
    on_header_menu: Option<HeaderHandler>,
}

impl<R: TableRow> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            selected: AHashSet::new(),
            row_height: 36.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            on_toggle_row: None,
            on_toggle_page: None,
            on_header_menu: None,
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Replace the set of checked row ids
    pub fn set_selected(&mut self, selected: impl IntoIterator<Item = u64>) {
        self.selected = selected.into_iter().collect();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    pub fn set_row_height(&mut self, height: f32) {
        self.row_height = height;
    }

    pub fn set_header_height(&mut self, height: f32) {
        self.header_height = height;
    }

    pub fn on_toggle_row(&mut self, handler: impl Fn(u64, &mut Window, &mut App) + 'static) {
        self.on_toggle_row = Some(Rc::new(handler));
    }

    pub fn on_toggle_page(&mut self, handler: impl Fn(&mut Window, &mut App) + 'static) {
        self.on_toggle_page = Some(Rc::new(handler));
    }

    pub fn on_header_menu(&mut self, handler: impl Fn(&mut Window, &mut App) + 'static) {
        self.on_header_menu = Some(Rc::new(handler));
    }

    /// Header checkbox state as (checked, indeterminate)
    fn header_check_state(&self) -> (bool, bool) {
        let on_page = self
            .rows
            .iter()
            .filter(|row| self.selected.contains(&row.row_id()))
            .count();
        let all = !self.rows.is_empty() && on_page == self.rows.len();
        (all, on_page > 0 && !all)
    }

    fn sized_cell(width: ColumnWidth) -> gpui::Div {
        let cell = div().px_3().overflow_hidden();
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_shrink_0(),
            ColumnWidth::Flex { min } => cell.flex_1().min_w(px(min)),
            ColumnWidth::Relative(fraction) => cell.w(relative(fraction)).flex_shrink_0(),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        let (checked, indeterminate) = self.header_check_state();
        let on_toggle_page = self.on_toggle_page.clone();
        let on_header_menu = self.on_header_menu.clone();

        let mut header_checkbox = Checkbox::new("table-select-page")
            .checked(checked)
            .indeterminate(indeterminate)
            .disabled(self.rows.is_empty());
        if let Some(handler) = on_toggle_page {
            header_checkbox = header_checkbox.on_change(move |_, window, cx| handler(window, cx));
        }

        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(GalleryColors::table_header_bg())
            .border_b_1()
            .border_color(GalleryColors::border())
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .flex()
                    .justify_center()
                    .child(header_checkbox),
            )
            .children(self.columns.iter().map(|col| {
                let menu = on_header_menu.clone().filter(|_| col.header_menu);
                Self::sized_cell(col.width)
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(GalleryColors::text_primary())
                    .child(col.label.clone())
                    .when_some(menu, |el, handler| {
                        el.child(
                            div()
                                .id(ElementId::Name(format!("header-menu-{}", col.id).into()))
                                .px_1()
                                .rounded_sm()
                                .cursor_pointer()
                                .text_color(GalleryColors::text_secondary())
                                .hover(|s| s.bg(GalleryColors::table_row_hover()))
                                .on_click(move |_, window, cx| handler(window, cx))
                                .child("▾"),
                        )
                    })
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let id = row.row_id();
        let selected = self.selected.contains(&id);
        let bg = if selected {
            GalleryColors::table_row_selected()
        } else if index % 2 == 0 {
            GalleryColors::content_bg()
        } else {
            GalleryColors::table_row_alt()
        };
        let on_toggle_row = self.on_toggle_row.clone();

        div()
            .id(ElementId::Name(format!("row-{id}").into()))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(GalleryColors::table_row_hover()))
            .border_b_1()
            .border_color(GalleryColors::border())
            .when_some(on_toggle_row, |el, handler| {
                el.cursor_pointer()
                    .on_click(move |_, window, cx| handler(id, window, cx))
            })
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .flex()
                    .justify_center()
                    // Row click toggles; the box only mirrors the state
                    .child(Checkbox::new(ElementId::Name(format!("check-{id}").into())).checked(selected)),
            )
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .whitespace_nowrap()
                    .text_ellipsis()
                    .child(col.render_cell(row))
            }))
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(GalleryColors::text_muted())
            .child(if self.loading {
                SharedString::from("Loading...")
            } else {
                self.empty_message.clone()
            })
    }

    /// Thin strip shown above the rows while a fetch is in flight
    fn render_loading_strip(&self) -> impl IntoElement {
        div()
            .w_full()
            .px_3()
            .py_1()
            .bg(GalleryColors::accent_soft())
            .text_xs()
            .text_color(GalleryColors::accent())
            .child("Loading...")
    }
}

impl<R: TableRow> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GalleryColors::content_bg())
            .border_1()
            .border_color(GalleryColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            // Previous rows stay visible while the next page loads
            table = table.when(self.loading, |el| el.child(self.render_loading_strip()));
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}
