//! Artworks Page
//!
//! The selectable artworks table with its pagination bar, bulk-select
//! popover, error banner and selected records panel.

use gpui::{
    div, prelude::*, px, Context, Entity, FocusHandle, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination, TableRow};
use crate::components::composite::popover::Popover;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{numbered_options, Select};
use crate::constants::{
    CELL_TEXT_LIMIT, PAGINATION_WINDOW, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
};
use crate::domain::artwork::{Artwork, ArtworkId};
use crate::eventing::table_event::SelectionChange;
use crate::features::artworks::controller::ArtworksController;
use crate::helpers::{TableAction, TABLE_CONTEXT};
use crate::state::table_state::TableState;
use crate::theme::colors::GalleryColors;
use crate::utils::format::{format_optional_year, format_year_range, single_line, truncate};

impl TableRow for Artwork {
    fn row_id(&self) -> u64 {
        self.id.0
    }
}

fn text_cell(text: &str) -> gpui::AnyElement {
    div()
        .text_sm()
        .child(truncate(&single_line(text), CELL_TEXT_LIMIT))
        .into_any_element()
}

fn year_cell(year: Option<i64>) -> gpui::AnyElement {
    div()
        .text_sm()
        .text_color(GalleryColors::text_secondary())
        .child(format_optional_year(year))
        .into_any_element()
}

/// Artworks page component
pub struct ArtworksPage {
    entities: AppEntities,
    controller: ArtworksController,
    table: Entity<DataTable<Artwork>>,
    focus_handle: FocusHandle,
    bulk_focus: FocusHandle,
}

impl ArtworksPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ArtworksController::new(entities.clone());
        let focus_handle = cx.focus_handle();
        let bulk_focus = cx.focus_handle();

        let table = cx.new(|cx| {
            let mut table = DataTable::<Artwork>::new(cx);
            table.set_columns(Self::create_columns());
            table.set_row_height(TABLE_ROW_HEIGHT);
            table.set_header_height(TABLE_HEADER_HEIGHT);
            table.set_empty_message("No artworks on this page");

            let c = controller.clone();
            table.on_toggle_row(move |id, _window, cx| {
                c.apply_selection(SelectionChange::ToggleRow(ArtworkId(id)), cx);
            });
            let c = controller.clone();
            table.on_toggle_page(move |_window, cx| {
                c.apply_selection(SelectionChange::TogglePage, cx);
            });
            let c = controller.clone();
            let focus = bulk_focus.clone();
            table.on_header_menu(move |window, cx| {
                c.toggle_bulk_select(cx);
                window.focus(&focus);
            });
            table
        });

        Self::sync_table(&table, &entities.table, cx);

        let table_clone = table.clone();
        cx.observe(&entities.table, move |_this, state, cx| {
            Self::sync_table(&table_clone, &state, cx);
            cx.notify();
        })
        .detach();

        cx.observe(&entities.bulk_select, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        controller.load_initial(cx);

        Self {
            entities,
            controller,
            table,
            focus_handle,
            bulk_focus,
        }
    }

    /// Push the table state into the table component
    fn sync_table(table: &Entity<DataTable<Artwork>>, state: &Entity<TableState>, cx: &mut gpui::App) {
        // Extract data first to avoid borrow conflicts
        let (rows, selected, loading) = {
            let state = state.read(cx);
            (
                state.records().to_vec(),
                state.selection().ids().into_iter().map(|id| id.0).collect::<Vec<_>>(),
                state.is_loading(),
            )
        };
        table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_selected(selected);
            table.set_loading(loading);
            cx.notify();
        });
    }

    fn create_columns() -> Vec<Column<Artwork>> {
        vec![
            Column::new("title", "Title", |row: &Artwork| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(truncate(&row.display_title(), CELL_TEXT_LIMIT))
                    .into_any_element()
            })
            .flex_width(220.0)
            .with_header_menu(),
            Column::new("place_of_origin", "Place of origin", |row: &Artwork| {
                text_cell(row.place_of_origin())
            })
            .fixed_width(150.0),
            Column::new("artist_display", "Artist", |row: &Artwork| {
                text_cell(row.artist_display())
            })
            .flex_width(200.0),
            Column::new("inscriptions", "Inscriptions", |row: &Artwork| {
                text_cell(row.inscriptions())
            })
            .flex_width(160.0),
            Column::new("date_start", "Start", |row: &Artwork| year_cell(row.date_start))
                .fixed_width(90.0),
            Column::new("date_end", "End", |row: &Artwork| year_cell(row.date_end))
                .fixed_width(90.0),
        ]
    }

    fn on_table_action(&mut self, action: &TableAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            TableAction::NextPage => self.controller.next_page(cx),
            TableAction::PreviousPage => self.controller.previous_page(cx),
            TableAction::Reload => self.controller.retry(cx),
            TableAction::TogglePage => {
                self.controller.apply_selection(SelectionChange::TogglePage, cx)
            }
            TableAction::ToggleBulkSelect => {
                self.controller.toggle_bulk_select(cx);
                window.focus(&self.bulk_focus);
            }
            TableAction::ClearSelection => self.controller.apply_selection(SelectionChange::Clear, cx),
        }
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let table = self.entities.table.read(cx);
        let selected = table.selection().len();
        let loading = table.is_loading();

        let reload = self.controller.clone();
        let bulk = self.controller.clone();
        let focus = self.bulk_focus.clone();

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_baseline()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(GalleryColors::text_primary())
                            .child("Collection"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_secondary())
                            .child(format!("{selected} selected")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::secondary("select-first-n", "Select first N…")
                            .size(ButtonSize::Small)
                            .on_click(move |_, window, cx| {
                                bulk.toggle_bulk_select(cx);
                                window.focus(&focus);
                            }),
                    )
                    .child(
                        Button::primary("reload-page", if loading { "Loading…" } else { "Reload" })
                            .size(ButtonSize::Small)
                            .shortcut("⌘R")
                            .disabled(loading)
                            .on_click(move |_, _window, cx| reload.retry(cx)),
                    ),
            )
    }

    fn render_error_banner(&self, cx: &Context<Self>) -> Option<impl IntoElement> {
        let failure = self.entities.table.read(cx).last_error()?.clone();
        let controller = self.controller.clone();

        Some(
            div()
                .w_full()
                .px_4()
                .py_2()
                .flex()
                .items_center()
                .justify_between()
                .rounded_md()
                .bg(GalleryColors::danger_soft())
                .border_1()
                .border_color(GalleryColors::danger())
                .child(
                    div()
                        .text_sm()
                        .text_color(GalleryColors::danger())
                        .child(format!("Could not load artworks ({failure})")),
                )
                .child(
                    Button::danger("retry-fetch", "Retry")
                        .size(ButtonSize::Small)
                        .on_click(move |_, _window, cx| controller.retry(cx)),
                ),
        )
    }

    fn render_bulk_popover(&self, cx: &Context<Self>) -> Option<impl IntoElement> {
        let bulk = self.entities.bulk_select.read(cx);
        if !bulk.is_open() {
            return None;
        }
        let input = bulk.input().to_string();
        let value = bulk.value();
        let available = self.entities.table.read(cx).records().len();
        let in_range = value.is_some_and(|n| n >= 1 && n <= available);

        let key_controller = self.controller.clone();
        let close_controller = self.controller.clone();
        let pick_controller = self.controller.clone();
        let submit_controller = self.controller.clone();

        let display: SharedString = if input.is_empty() {
            "Type a number".into()
        } else {
            input.into()
        };

        Some(
            Popover::new("Select first N rows")
                .anchor(px(TABLE_HEADER_HEIGHT), px(48.0))
                .focus(self.bulk_focus.clone())
                .on_key_down(move |event: &KeyDownEvent, _window, cx| {
                    key_controller.bulk_key(&event.keystroke.key, cx);
                    cx.stop_propagation();
                })
                .on_close(move |_window, cx| close_controller.close_bulk_select(cx))
                .child(
                    div()
                        .w_full()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .border_1()
                        .border_color(GalleryColors::border_focus())
                        .bg(GalleryColors::input_bg())
                        .text_sm()
                        .text_color(if value.is_some() {
                            GalleryColors::text_primary()
                        } else {
                            GalleryColors::input_placeholder()
                        })
                        .child(display),
                )
                .child(
                    Select::new("bulk-count")
                        .options(numbered_options(available))
                        .selected(value)
                        .placeholder("Nothing loaded on this page")
                        .on_select(move |n, _window, cx| pick_controller.pick_bulk_count(n, cx)),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_xs()
                                .text_color(GalleryColors::text_muted())
                                .child(format!("1 to {available} on this page")),
                        )
                        .child(
                            Button::primary("bulk-submit", "Submit")
                                .size(ButtonSize::Small)
                                .on_click(move |_, _window, cx| {
                                    submit_controller.submit_bulk_select(cx)
                                }),
                        ),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(if in_range || value.is_none() {
                            GalleryColors::text_muted()
                        } else {
                            GalleryColors::warning()
                        })
                        .child(if in_range || value.is_none() {
                            "Replaces the current selection"
                        } else {
                            "Out of range: the selection will not change"
                        }),
                ),
        )
    }

    fn render_selected_panel(&self, cx: &Context<Self>) -> Option<impl IntoElement> {
        if !self.entities.config.read(cx).config.ui.show_selected_panel {
            return None;
        }
        let selected: Vec<Artwork> = self
            .entities
            .table
            .read(cx)
            .selection()
            .iter()
            .cloned()
            .collect();
        let clear = self.controller.clone();

        Some(
            div()
                .w_full()
                .h(px(180.0))
                .flex()
                .flex_col()
                .bg(GalleryColors::panel_bg())
                .border_1()
                .border_color(GalleryColors::border())
                .rounded_md()
                .child(
                    div()
                        .px_4()
                        .py_2()
                        .flex()
                        .items_center()
                        .justify_between()
                        .border_b_1()
                        .border_color(GalleryColors::border())
                        .child(
                            div()
                                .text_sm()
                                .font_weight(gpui::FontWeight::MEDIUM)
                                .text_color(GalleryColors::text_primary())
                                .child(format!("Selected records ({})", selected.len())),
                        )
                        .child(
                            Button::ghost("clear-selection", "Clear")
                                .size(ButtonSize::Small)
                                .disabled(selected.is_empty())
                                .on_click(move |_, _window, cx| {
                                    clear.apply_selection(SelectionChange::Clear, cx)
                                }),
                        ),
                )
                .child(
                    div()
                        .id("selected-records")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .when(selected.is_empty(), |el| {
                            el.child(
                                div()
                                    .py_2()
                                    .text_sm()
                                    .text_color(GalleryColors::text_muted())
                                    .child("Nothing selected"),
                            )
                        })
                        .children(selected.into_iter().map(|artwork| {
                            let remove = self.controller.clone();
                            let id = artwork.id;
                            div()
                                .w_full()
                                .py_1()
                                .flex()
                                .items_center()
                                .justify_between()
                                .child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap_2()
                                        .child(
                                            div()
                                                .text_sm()
                                                .text_color(GalleryColors::text_primary())
                                                .child(truncate(
                                                    &artwork.display_title(),
                                                    CELL_TEXT_LIMIT,
                                                )),
                                        )
                                        .child(
                                            div()
                                                .text_xs()
                                                .text_color(GalleryColors::text_muted())
                                                .child(format_year_range(
                                                    artwork.date_start,
                                                    artwork.date_end,
                                                )),
                                        ),
                                )
                                .child(
                                    Button::ghost(
                                        gpui::ElementId::Name(format!("remove-{id}").into()),
                                        "Remove",
                                    )
                                    .size(ButtonSize::Small)
                                    .on_click(move |_, _window, cx| {
                                        remove.apply_selection(SelectionChange::ToggleRow(id), cx)
                                    }),
                                )
                        })),
                ),
        )
    }
}

impl Render for ArtworksPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Table shortcuts need focus inside the page; hand it back when the popover closes
        let bulk_open = self.entities.bulk_select.read(cx).is_open();
        if window.focused(cx).is_none() || (!bulk_open && self.bulk_focus.is_focused(window)) {
            window.focus(&self.focus_handle);
        }

        let (current, total_pages, total_records, loading) = {
            let table = self.entities.table.read(cx);
            (
                table.current_page(),
                table.total_pages(),
                table.total_records(),
                table.is_loading(),
            )
        };
        let controller = self.controller.clone();

        div()
            .id("artworks-page")
            .key_context(TABLE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_table_action))
            .size_full()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .bg(GalleryColors::background())
            .child(self.render_toolbar(cx))
            .children(self.render_error_banner(cx))
            .child(
                div()
                    .relative()
                    .flex_1()
                    .min_h(px(240.0))
                    .flex()
                    .flex_col()
                    .child(div().flex_1().child(self.table.clone()))
                    .child(
                        Pagination::new(current, total_pages, total_records)
                            .window_span(PAGINATION_WINDOW)
                            .disabled(loading && total_records == 0)
                            .on_page_change(move |page, _window, cx| {
                                controller.go_to_page(page, cx)
                            }),
                    )
                    .children(self.render_bulk_popover(cx)),
            )
            .children(self.render_selected_panel(cx))
    }
}
