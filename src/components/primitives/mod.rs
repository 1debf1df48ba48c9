//! Primitive Components
//!
//! Basic building blocks: buttons, checkboxes and option pickers.

pub mod button;
pub mod checkbox;
pub mod select;
