//! Use cases - the combat resolution core.
//!
//! - `routing` decides who and what an attempt involves
//! - `modifiers` turns persistent modifiers into roll bonuses
//! - `roll` is the d20 mechanic
//! - `event_bus` groups reported events into actions

pub mod event_bus;
pub mod modifiers;
pub mod roll;
pub mod routing;

pub use event_bus::ActionEventBus;
pub use modifiers::ModifierAggregator;
pub use roll::RollEngine;
pub use routing::{ActionRouter, Resolution, RoutedSubject, RoutingFailure};
