//! Composite Components
//!
//! Components built from primitives: the data table and the popover.

pub mod data_table;
pub mod popover;
