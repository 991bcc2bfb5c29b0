//! Vehicle aggregate - ordered seats and components around one chassis.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Component, CrewMember, Seat};
use crate::value_objects::ComponentType;
use crate::{ComponentId, DomainError, SeatId, VehicleId};

/// A crew-operated vehicle.
///
/// Seat and component order is meaningful: routing breaks ties and picks
/// "first match" by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "VehicleRaw")]
pub struct Vehicle {
    id: VehicleId,
    name: String,
    components: Vec<Component>,
    seats: Vec<Seat>,
}

/// Unvalidated wire form; deserialization goes through [`Vehicle::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleRaw {
    id: VehicleId,
    name: String,
    components: Vec<Component>,
    seats: Vec<Seat>,
}

impl TryFrom<VehicleRaw> for Vehicle {
    type Error = DomainError;

    fn try_from(raw: VehicleRaw) -> Result<Self, Self::Error> {
        Ok(Vehicle::new(raw.name, raw.components, raw.seats)?.with_id(raw.id))
    }
}

impl Vehicle {
    /// Build a vehicle, validating its topology.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty
    /// - `Constraint` unless there is exactly one chassis
    /// - `Constraint` on duplicate component or seat ids
    /// - `NotFound` if a seat controls a component the vehicle doesn't have
    pub fn new(
        name: impl Into<String>,
        components: Vec<Component>,
        seats: Vec<Seat>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Vehicle name cannot be empty"));
        }

        let chassis_count = components.iter().filter(|c| c.is_chassis()).count();
        if chassis_count != 1 {
            return Err(DomainError::constraint(format!(
                "vehicle must have exactly one chassis, found {}",
                chassis_count
            )));
        }

        let mut component_ids = HashSet::with_capacity(components.len());
        for component in &components {
            if !component_ids.insert(component.id()) {
                return Err(DomainError::constraint(format!(
                    "duplicate component id {}",
                    component.id()
                )));
            }
        }

        let mut seat_ids = HashSet::with_capacity(seats.len());
        for seat in &seats {
            if !seat_ids.insert(seat.id()) {
                return Err(DomainError::constraint(format!(
                    "duplicate seat id {}",
                    seat.id()
                )));
            }
            if let Some(missing) = seat
                .controlled_components()
                .iter()
                .find(|id| !component_ids.contains(*id))
            {
                return Err(DomainError::not_found("Component", missing.to_string()));
            }
        }

        Ok(Self {
            id: VehicleId::new(),
            name,
            components,
            seats,
        })
    }

    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }

    /// The chassis. Always present on a vehicle built through [`Vehicle::new`].
    pub fn chassis(&self) -> Option<&Component> {
        self.components.iter().find(|c| c.is_chassis())
    }

    /// First operational component of a type, in component order.
    pub fn first_operational_of_type(&self, component_type: ComponentType) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.component_type() == component_type && c.is_operational())
    }

    /// First component of a type regardless of state.
    pub fn first_of_type(&self, component_type: ComponentType) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.component_type() == component_type)
    }

    /// First seat (in seat order) that controls the component.
    pub fn seat_controlling(&self, component_id: ComponentId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.controls(component_id))
    }

    /// Assigned crew members, in seat order.
    pub fn crew(&self) -> impl Iterator<Item = &CrewMember> + '_ {
        self.seats.iter().filter_map(Seat::assigned_character)
    }

    // Mutation between resolutions

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    pub fn seat_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entities::SeatRole;

    fn rover_parts() -> (Vec<Component>, ComponentId) {
        let gun = Component::new("Autocannon", ComponentType::Weapon, 12);
        let gun_id = gun.id();
        (
            vec![
                Component::chassis("Rover frame", 40),
                Component::new("Turbine", ComponentType::Engine, 20),
                gun,
            ],
            gun_id,
        )
    }

    #[test]
    fn test_builds_valid_vehicle() {
        let (components, gun_id) = rover_parts();
        let seats = vec![Seat::new("Turret").with_role(SeatRole::Gunner).controlling(gun_id)];
        let rover = Vehicle::new("Rover", components, seats).unwrap();

        assert_eq!(rover.chassis().map(Component::name), Some("Rover frame"));
        assert_eq!(rover.seat_controlling(gun_id).map(Seat::name), Some("Turret"));
        assert_eq!(
            rover.first_of_type(ComponentType::Weapon).map(Component::id),
            Some(gun_id)
        );
    }

    #[test]
    fn test_rejects_missing_chassis() {
        let components = vec![Component::new("Turbine", ComponentType::Engine, 20)];
        let err = Vehicle::new("Rover", components, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn test_rejects_two_chassis() {
        let components = vec![Component::chassis("A", 10), Component::chassis("B", 10)];
        assert!(Vehicle::new("Rover", components, vec![]).is_err());
    }

    #[test]
    fn test_rejects_seat_controlling_unknown_component() {
        let (components, _) = rover_parts();
        let seats = vec![Seat::new("Ghost").controlling(ComponentId::new())];
        let err = Vehicle::new("Rover", components, seats).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_rejects_empty_name() {
        let (components, _) = rover_parts();
        assert!(matches!(
            Vehicle::new("  ", components, vec![]),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_first_operational_skips_destroyed() {
        let broken = Component::new("Left gun", ComponentType::Weapon, 10).with_integrity(0);
        let working = Component::new("Right gun", ComponentType::Weapon, 10);
        let working_id = working.id();
        let rover = Vehicle::new(
            "Rover",
            vec![Component::chassis("Frame", 30), broken, working],
            vec![],
        )
        .unwrap();

        assert_eq!(
            rover
                .first_operational_of_type(ComponentType::Weapon)
                .map(Component::id),
            Some(working_id)
        );
        assert_eq!(
            rover.first_of_type(ComponentType::Weapon).map(Component::name),
            Some("Left gun")
        );
    }

    #[test]
    fn test_crew_in_seat_order() {
        let (components, _) = rover_parts();
        let seats = vec![
            Seat::new("Empty"),
            Seat::new("Cockpit").with_occupant(Arc::new(CrewMember::new("Vex", 3))),
            Seat::new("Rear").with_occupant(Arc::new(CrewMember::new("Ash", 2))),
        ];
        let rover = Vehicle::new("Rover", components, seats).unwrap();
        let names: Vec<&str> = rover.crew().map(CrewMember::name).collect();
        assert_eq!(names, vec!["Vex", "Ash"]);
    }

    #[test]
    fn test_component_mut_applies_damage() {
        let (components, gun_id) = rover_parts();
        let mut rover = Vehicle::new("Rover", components, vec![]).unwrap();
        if let Some(gun) = rover.component_mut(gun_id) {
            gun.take_damage(100);
        }
        assert!(rover
            .component(gun_id)
            .is_some_and(|gun| !gun.is_operational()));
    }

    #[test]
    fn test_deserialize_round_trips_valid_vehicle() {
        let (components, gun_id) = rover_parts();
        let seats = vec![Seat::new("Turret").controlling(gun_id)];
        let rover = Vehicle::new("Rover", components, seats).unwrap();

        let json = serde_json::to_value(&rover).unwrap();
        let back: Vehicle = serde_json::from_value(json).unwrap();

        assert_eq!(back, rover);
    }

    #[test]
    fn test_deserialize_rejects_vehicle_without_chassis() {
        let (components, _) = rover_parts();
        let rover = Vehicle::new("Rover", components, vec![]).unwrap();
        let mut json = serde_json::to_value(&rover).unwrap();

        let parts = json["components"].as_array_mut().unwrap();
        parts.retain(|part| part["componentType"] != "chassis");
        let gun = parts[1].clone();
        parts.push(gun);

        let result = serde_json::from_value::<Vehicle>(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("exactly one chassis"), "{}", message);
    }

    #[test]
    fn test_deserialize_rejects_unknown_controlled_component() {
        let (components, _) = rover_parts();
        let rover = Vehicle::new("Rover", components, vec![Seat::new("Turret")]).unwrap();
        let mut json = serde_json::to_value(&rover).unwrap();
        json["seats"][0]["controls"] = serde_json::json!([ComponentId::new()]);

        assert!(serde_json::from_value::<Vehicle>(json).is_err());
    }
}
