//! Select Component
//!
//! An inline option picker: every option is shown as a chip and clicking one
//! reports its value.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// A select option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: SharedString,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<SharedString>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Options `1..=max` labelled with their number
pub fn numbered_options(max: usize) -> Vec<SelectOption<usize>> {
    (1..=max).map(|n| SelectOption::new(n, n.to_string())).collect()
}

/// An inline select component
#[derive(IntoElement)]
pub struct Select<T: Clone + PartialEq + 'static> {
    id: ElementId,
    selected: Option<T>,
    options: Vec<SelectOption<T>>,
    placeholder: SharedString,
    on_select: Option<Rc<dyn Fn(T, &mut Window, &mut App)>>,
}

impl<T: Clone + PartialEq + 'static> Select<T> {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "No options".into(),
            on_select: None,
        }
    }

    pub fn selected(mut self, value: Option<T>) -> Self {
        self.selected = value;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption<T>>) -> Self {
        self.options = options;
        self
    }

    /// Text shown when there are no options
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn on_select(mut self, handler: impl Fn(T, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl<T: Clone + PartialEq + 'static> RenderOnce for Select<T> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.options.is_empty() {
            return div()
                .id(self.id)
                .text_sm()
                .text_color(GalleryColors::input_placeholder())
                .child(self.placeholder);
        }

        let selected = self.selected;
        let on_select = self.on_select;

        div()
            .id(self.id)
            .flex()
            .flex_wrap()
            .gap_1()
            .children(self.options.into_iter().enumerate().map(|(i, option)| {
                let active = selected.as_ref() == Some(&option.value);
                let handler = on_select.clone();
                let value = option.value;

                div()
                    .id(ElementId::Name(format!("option-{i}").into()))
                    .min_w(px(28.0))
                    .px_2()
                    .py_1()
                    .flex()
                    .justify_center()
                    .rounded_sm()
                    .border_1()
                    .text_sm()
                    .cursor_pointer()
                    .when(active, |el| {
                        el.bg(GalleryColors::accent())
                            .border_color(GalleryColors::accent())
                            .text_color(GalleryColors::text_light())
                    })
                    .when(!active, |el| {
                        el.bg(GalleryColors::input_bg())
                            .border_color(GalleryColors::input_border())
                            .text_color(GalleryColors::text_primary())
                            .hover(|s| s.bg(GalleryColors::table_row_hover()))
                    })
                    .when_some(handler, |el, handler| {
                        el.on_click(move |_, window, cx| handler(value.clone(), window, cx))
                    })
                    .child(option.label)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_options() {
        let options = numbered_options(3);
        assert_eq!(
            options,
            vec![
                SelectOption::new(1, "1"),
                SelectOption::new(2, "2"),
                SelectOption::new(3, "3"),
            ]
        );
        assert!(numbered_options(0).is_empty());
    }
}
