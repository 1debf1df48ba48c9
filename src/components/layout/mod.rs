//! Layout Components
//!
//! Header and log panel framing the artworks page.

pub mod header;
pub mod log_panel;
