//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod bulk_select_state;
pub mod config_state;
pub mod log_state;
pub mod table_state;
