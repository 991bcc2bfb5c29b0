//! Domain entities - Core business objects with identity

mod component;
mod crew_member;
mod seat;
mod stat_modifier;
mod vehicle;

pub use component::Component;
pub use crew_member::CrewMember;
pub use seat::{Seat, SeatRole};
pub use stat_modifier::StatModifier;
pub use vehicle::Vehicle;
