//! Vehicle components (subsystems), including the chassis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{ComponentType, VehicleAttribute};
use crate::ComponentId;

/// A physical subsystem of a vehicle.
///
/// Whether a component can be used is derived from its own damage and power
/// state; nothing outside the component decides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ComponentRaw")]
pub struct Component {
    id: ComponentId,
    name: String,
    component_type: ComponentType,
    integrity: u32,
    max_integrity: u32,
    powered: bool,
    #[serde(default)]
    base_values: BTreeMap<VehicleAttribute, i32>,
}

/// Wire form; integrity is clamped to the maximum on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentRaw {
    id: ComponentId,
    name: String,
    component_type: ComponentType,
    integrity: u32,
    max_integrity: u32,
    powered: bool,
    #[serde(default)]
    base_values: BTreeMap<VehicleAttribute, i32>,
}

impl From<ComponentRaw> for Component {
    fn from(raw: ComponentRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            component_type: raw.component_type,
            integrity: raw.integrity.min(raw.max_integrity),
            max_integrity: raw.max_integrity,
            powered: raw.powered,
            base_values: raw.base_values,
        }
    }
}

impl Component {
    /// A fresh, fully intact and powered component.
    pub fn new(name: impl Into<String>, component_type: ComponentType, max_integrity: u32) -> Self {
        Self {
            id: ComponentId::new(),
            name: name.into(),
            component_type,
            integrity: max_integrity,
            max_integrity,
            powered: true,
            base_values: BTreeMap::new(),
        }
    }

    /// Shorthand for the vehicle's chassis.
    pub fn chassis(name: impl Into<String>, max_integrity: u32) -> Self {
        Self::new(name, ComponentType::Chassis, max_integrity)
    }

    pub fn with_id(mut self, id: ComponentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_base_value(mut self, attribute: VehicleAttribute, value: i32) -> Self {
        self.base_values.insert(attribute, value);
        self
    }

    pub fn with_integrity(mut self, integrity: u32) -> Self {
        self.integrity = integrity.min(self.max_integrity);
        self
    }

    pub fn unpowered(mut self) -> Self {
        self.powered = false;
        self
    }

    // Read accessors

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn is_chassis(&self) -> bool {
        self.component_type == ComponentType::Chassis
    }

    pub fn integrity(&self) -> u32 {
        self.integrity
    }

    pub fn max_integrity(&self) -> u32 {
        self.max_integrity
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// A component works while it has power and is not destroyed.
    pub fn is_operational(&self) -> bool {
        self.powered && self.integrity > 0
    }

    /// Intrinsic value this component contributes to an attribute (0 if none).
    pub fn base_value(&self, attribute: VehicleAttribute) -> i32 {
        self.base_values.get(&attribute).copied().unwrap_or(0)
    }

    // State changes (applied between resolutions, never during one)

    /// Apply damage. Returns the integrity actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.integrity);
        self.integrity -= removed;
        removed
    }

    /// Restore integrity up to the maximum. Returns the integrity actually restored.
    pub fn repair(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_integrity.saturating_sub(self.integrity));
        self.integrity += restored;
        restored
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_component_is_operational() {
        let engine = Component::new("Turbine", ComponentType::Engine, 30);
        assert!(engine.is_operational());
        assert_eq!(engine.integrity(), 30);
    }

    #[test]
    fn test_destroyed_component_is_not_operational() {
        let mut gun = Component::new("Autocannon", ComponentType::Weapon, 10);
        assert_eq!(gun.take_damage(25), 10);
        assert_eq!(gun.integrity(), 0);
        assert!(!gun.is_operational());
    }

    #[test]
    fn test_unpowered_component_is_not_operational() {
        let mut sensors = Component::new("Radar", ComponentType::Sensors, 10).unpowered();
        assert!(!sensors.is_operational());
        sensors.set_powered(true);
        assert!(sensors.is_operational());
    }

    #[test]
    fn test_repair_caps_at_max() {
        let mut hull = Component::chassis("Frame", 40).with_integrity(35);
        assert_eq!(hull.repair(10), 5);
        assert_eq!(hull.integrity(), 40);
    }

    #[test]
    fn test_base_value_defaults_to_zero() {
        let hull = Component::chassis("Frame", 40).with_base_value(VehicleAttribute::Mobility, 3);
        assert_eq!(hull.base_value(VehicleAttribute::Mobility), 3);
        assert_eq!(hull.base_value(VehicleAttribute::Sensors), 0);
        assert!(hull.is_chassis());
    }

    #[test]
    fn test_deserialize_clamps_integrity_to_max() {
        let hull = Component::chassis("Frame", 40);
        let mut json = serde_json::to_value(&hull).unwrap();
        json["integrity"] = serde_json::json!(55);

        let mut hull: Component = serde_json::from_value(json).unwrap();

        assert_eq!(hull.integrity(), 40);
        assert_eq!(hull.repair(10), 0);
    }
}
