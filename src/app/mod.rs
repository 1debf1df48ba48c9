//! Application Layer
//!
//! App initialization, window management, global entities, and workspace.

pub mod application;
pub mod entities;
pub mod workspace;
