//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    /// Some but not all of the covered items are checked
    Indeterminate,
    Checked,
}

impl CheckState {
    pub fn from_flags(checked: bool, indeterminate: bool) -> Self {
        match (checked, indeterminate) {
            (true, _) => CheckState::Checked,
            (false, true) => CheckState::Indeterminate,
            (false, false) => CheckState::Unchecked,
        }
    }

    fn mark(self) -> &'static str {
        match self {
            CheckState::Unchecked => "",
            CheckState::Indeterminate => "–",
            CheckState::Checked => "✓",
        }
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    indeterminate: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            indeterminate: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Show the partial mark when not fully checked
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler, called with the requested new value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = CheckState::from_flags(self.checked, self.indeterminate);
        let checked = self.checked;
        let filled = state != CheckState::Unchecked;

        let (box_bg, border_color) = if filled {
            (GalleryColors::accent(), GalleryColors::accent())
        } else {
            (GalleryColors::input_bg(), GalleryColors::input_border())
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(GalleryColors::text_light())
                    .text_size(px(12.0))
                    .child(state.mark()),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .child(label),
            );
        }

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else if let Some(handler) = self.on_change {
            checkbox = checkbox
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(!checked, window, cx));
        }

        checkbox
    }
}
