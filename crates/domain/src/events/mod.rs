//! Domain events
//!
//! Combat events and the action frames that group them.

pub mod combat_events;

pub use combat_events::*;
