//! Components - Reusable UI Components
//!
//! Primitives and composites are pure UI; layout components observe app entities.

pub mod composite;
pub mod layout;
pub mod primitives;
