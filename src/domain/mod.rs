//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod artwork;
pub mod config;
pub mod page;
pub mod selection;
