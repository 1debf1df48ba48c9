//! DataTable Component
//!
//! A selectable data table with a pagination bar.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::{DataTable, TableRow};
pub use pagination::{page_window, Pagination};
