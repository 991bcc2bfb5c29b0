//! Value objects - Immutable objects defined by their attributes

mod axis;
mod check_spec;
mod component_type;
mod roll;
mod skill;
mod stat;

pub use axis::{RollAxis, StatAxis};
pub use check_spec::{CheckDomain, CheckSpec, SaveSpec};
pub use component_type::ComponentType;
pub use roll::{RollBonus, RollDegree, RollOutcome, D20_FACES};
pub use skill::{SaveType, Skill};
pub use stat::{Attribute, VehicleAttribute};
