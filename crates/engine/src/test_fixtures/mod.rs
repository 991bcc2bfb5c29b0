//! Shared test vehicles and crews.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{crew, Rover};
//!
//! #[test]
//! fn test_gunner_fires() {
//!     let rover = Rover::crewed();
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use crewroll_domain::{
    Component, ComponentId, ComponentType, CrewMember, Seat, SeatId, SeatRole, Vehicle,
    VehicleAttribute,
};

// =============================================================================
// Crew
// =============================================================================

pub mod crew {
    use crewroll_domain::{Attribute, CrewMember, Skill};

    /// Dex 16, proficient in Piloting. Level 5.
    pub fn pilot() -> CrewMember {
        CrewMember::new("Ria Voss", 5)
            .with_ability(Attribute::Dex, 16)
            .with_ability(Attribute::Con, 12)
            .with_proficiency(Skill::Piloting)
    }

    /// Dex 14, proficient in Gunnery. Level 3.
    pub fn gunner() -> CrewMember {
        CrewMember::new("Tomas Hale", 3)
            .with_ability(Attribute::Dex, 14)
            .with_ability(Attribute::Str, 15)
            .with_proficiency(Skill::Gunnery)
    }

    /// Int 16, Con 14, proficient in Mechanics. Level 4.
    pub fn engineer() -> CrewMember {
        CrewMember::new("Mae Okafor", 4)
            .with_ability(Attribute::Int, 16)
            .with_ability(Attribute::Con, 14)
            .with_proficiency(Skill::Mechanics)
    }

    /// All scores 10, no proficiencies.
    pub fn rookie(name: &str) -> CrewMember {
        CrewMember::new(name, 1)
    }
}

// =============================================================================
// Vehicles
// =============================================================================

/// A four-component rover with three seats.
///
/// - Cockpit controls the hull
/// - Engine bay controls the engine
/// - Turret controls the autocannon
/// - Nothing controls the sensor mast
pub struct Rover {
    pub vehicle: Vehicle,
    pub hull: ComponentId,
    pub engine: ComponentId,
    pub weapon: ComponentId,
    pub sensors: ComponentId,
    pub cockpit: SeatId,
    pub engine_bay: SeatId,
    pub turret: SeatId,
}

impl Rover {
    /// Rover with every seat empty.
    pub fn empty() -> Self {
        let hull = Component::chassis("Hull", 40).with_base_value(VehicleAttribute::Mobility, 2);
        let engine = Component::new("Fusion drive", ComponentType::Engine, 20)
            .with_base_value(VehicleAttribute::Mobility, 1);
        let weapon = Component::new("Autocannon", ComponentType::Weapon, 15);
        let sensors = Component::new("Sensor mast", ComponentType::Sensors, 10)
            .with_base_value(VehicleAttribute::Sensors, 2);

        let cockpit = Seat::new("Cockpit")
            .with_role(SeatRole::Pilot)
            .controlling(hull.id());
        let engine_bay = Seat::new("Engine bay")
            .with_role(SeatRole::Engineer)
            .controlling(engine.id());
        let turret = Seat::new("Turret")
            .with_role(SeatRole::Gunner)
            .controlling(weapon.id());

        let ids = (
            hull.id(),
            engine.id(),
            weapon.id(),
            sensors.id(),
            cockpit.id(),
            engine_bay.id(),
            turret.id(),
        );
        let vehicle = Vehicle::new(
            "Dust Runner",
            vec![hull, engine, weapon, sensors],
            vec![cockpit, engine_bay, turret],
        )
        .expect("fixture rover is valid");

        Self {
            vehicle,
            hull: ids.0,
            engine: ids.1,
            weapon: ids.2,
            sensors: ids.3,
            cockpit: ids.4,
            engine_bay: ids.5,
            turret: ids.6,
        }
    }

    /// Pilot in the cockpit, engineer in the engine bay, gunner in the turret.
    pub fn crewed() -> Self {
        let mut rover = Self::empty();
        rover.seat(rover.cockpit, crew::pilot());
        rover.seat(rover.engine_bay, crew::engineer());
        rover.seat(rover.turret, crew::gunner());
        rover
    }

    pub fn seat(&mut self, seat: SeatId, member: CrewMember) {
        self.vehicle
            .seat_mut(seat)
            .expect("fixture seat exists")
            .assign(Arc::new(member));
    }

    pub fn vacate(&mut self, seat: SeatId) {
        self.vehicle
            .seat_mut(seat)
            .expect("fixture seat exists")
            .vacate();
    }

    pub fn component(&self, id: ComponentId) -> &Component {
        self.vehicle.component(id).expect("fixture component exists")
    }

    pub fn component_mut(&mut self, id: ComponentId) -> &mut Component {
        self.vehicle
            .component_mut(id)
            .expect("fixture component exists")
    }

    /// Knock a component out by draining its integrity.
    pub fn disable(&mut self, id: ComponentId) {
        let component = self.component_mut(id);
        let integrity = component.integrity();
        component.take_damage(integrity);
    }

    pub fn occupant(&self, seat: SeatId) -> &CrewMember {
        self.vehicle
            .seat(seat)
            .and_then(Seat::assigned_character)
            .expect("fixture seat is occupied")
    }
}
