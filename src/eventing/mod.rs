//! Eventing - Messages Crossing Layer Boundaries
//!
//! `app_event` carries service results to the UI; `table_event` narrows raw
//! widget interactions into validated table commands.

pub mod app_event;
pub mod table_event;
