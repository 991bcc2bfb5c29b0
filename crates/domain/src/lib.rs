//! crewroll domain - vehicles, crews, d20 rolls and combat events.
//!
//! Pure types and arithmetic. Nothing in this crate draws random numbers,
//! logs, or performs I/O; the engine crate injects those.

extern crate self as crewroll_domain;

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use entities::{Component, CrewMember, Seat, SeatRole, StatModifier, Vehicle};

pub use error::DomainError;

pub use events::{CauseRef, CombatAction, CombatEvent, CombatEventKind, DamageType, EntityRef};

// Re-export ID types
pub use ids::{ActionId, CharacterId, ComponentId, SeatId, StatModifierId, VehicleId};

pub use value_objects::{
    Attribute, CheckDomain, CheckSpec, ComponentType, RollAxis, RollBonus, RollDegree,
    RollOutcome, SaveSpec, SaveType, Skill, StatAxis, VehicleAttribute, D20_FACES,
};
