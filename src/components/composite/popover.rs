//! Popover Component
//!
//! A small floating panel anchored inside a relatively positioned parent.
//! Clicking the backdrop closes it; keys go to the optional key handler
//! while the panel holds focus.

use gpui::{
    div, prelude::*, px, App, ClickEvent, FocusHandle, InteractiveElement, IntoElement,
    KeyDownEvent, MouseButton, ParentElement, Pixels, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;

type KeyHandler = Box<dyn Fn(&KeyDownEvent, &mut Window, &mut App) + 'static>;

/// Popover component
#[derive(IntoElement)]
pub struct Popover {
    title: SharedString,
    children: Vec<gpui::AnyElement>,
    top: Pixels,
    left: Pixels,
    width: Pixels,
    focus_handle: Option<FocusHandle>,
    on_key_down: Option<KeyHandler>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Popover {
    /// Create a new popover
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            top: px(44.0),
            left: px(48.0),
            width: px(280.0),
            focus_handle: None,
            on_key_down: None,
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Offset of the panel from the parent's top left corner
    pub fn anchor(mut self, top: Pixels, left: Pixels) -> Self {
        self.top = top;
        self.left = left;
        self
    }

    pub fn width(mut self, width: Pixels) -> Self {
        self.width = width;
        self
    }

    /// Track focus so key events reach the panel
    pub fn focus(mut self, handle: FocusHandle) -> Self {
        self.focus_handle = Some(handle);
        self
    }

    pub fn on_key_down(
        mut self,
        handler: impl Fn(&KeyDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Popover {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let panel = div()
            .id("popover-panel")
            .absolute()
            .top(self.top)
            .left(self.left)
            .w(self.width)
            .bg(GalleryColors::content_bg())
            .border_1()
            .border_color(GalleryColors::border())
            .rounded_lg()
            .shadow_lg()
            .flex()
            .flex_col()
            // Keep clicks inside the panel from reaching the backdrop
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .when_some(self.focus_handle, |el, handle| el.track_focus(&handle))
            .when_some(self.on_key_down, |el, handler| el.on_key_down(handler))
            .child(
                div()
                    .px_4()
                    .py_2()
                    .border_b_1()
                    .border_color(GalleryColors::border())
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(GalleryColors::text_primary())
                    .child(self.title),
            )
            .child(
                div()
                    .px_4()
                    .py_3()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(self.children),
            );

        // Backdrop
        div()
            .id("popover-backdrop")
            .absolute()
            .inset_0()
            .bg(GalleryColors::overlay_hsla())
            .when_some(self.on_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(panel)
    }
}
