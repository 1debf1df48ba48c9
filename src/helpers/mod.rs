//! Helper Utilities
//!
//! Keyboard actions and platform directories.

mod action;
mod fs;

pub use action::*;
pub use fs::*;
