//! Artworks Feature
//!
//! The paginated artworks table and its controller.

pub mod controller;
pub mod page;

pub use controller::ArtworksController;
pub use page::ArtworksPage;
