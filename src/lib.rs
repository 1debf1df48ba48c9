//! Artworks Table Library
//!
//! A native desktop table over the Art Institute of Chicago collection API:
//! pages of artworks are fetched on demand and rows can be selected one by
//! one, a page at a time, or as the first N rows of the displayed page.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
