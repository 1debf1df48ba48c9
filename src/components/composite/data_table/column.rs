//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, SharedString};

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    pub width: ColumnWidth,
    /// Show the bulk select chevron next to the label
    pub header_menu: bool,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space, never narrower than `min`
    Flex { min: f32 },
    /// Fraction of the table width (0.0 to 1.0)
    Relative(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 80.0 }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            header_menu: false,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with a minimum
    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Set relative width
    pub fn relative_width(mut self, fraction: f32) -> Self {
        self.width = ColumnWidth::Relative(fraction.clamp(0.0, 1.0));
        self
    }

    /// Attach the header menu chevron to this column
    pub fn with_header_menu(mut self) -> Self {
        self.header_menu = true;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::IntoElement;

    #[test]
    fn test_column_builders() {
        let column: Column<u64> = Column::new("title", "Title", |_| "x".into_any_element())
            .relative_width(1.5)
            .with_header_menu();
        assert_eq!(column.width, ColumnWidth::Relative(1.0));
        assert!(column.header_menu);

        let column: Column<u64> =
            Column::new("id", "ID", |_| "x".into_any_element()).fixed_width(64.0);
        assert_eq!(column.width, ColumnWidth::Fixed(64.0));
        assert_eq!(ColumnWidth::default(), ColumnWidth::Flex { min: 80.0 });
    }
}
