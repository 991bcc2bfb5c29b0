//! crewroll engine library.
//!
//! Resolves skill checks, saving throws and attack rolls for crewed vehicles.
//!
//! ## Structure
//!
//! - `use_cases/` - Routing, modifier aggregation, rolling and event scoping
//! - `infrastructure/` - Ports for external collaborators and their adapters
//! - `app` - Combat session composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared vehicles and crews for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{Attempt, CombatSession};
pub use infrastructure::settings::EngineSettings;
