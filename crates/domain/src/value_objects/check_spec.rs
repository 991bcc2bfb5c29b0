//! Check and save specifications
//!
//! A spec says what kind of check is happening. It does not say who makes it
//! or with what; that is for routing to decide against the current vehicle.

use serde::{Deserialize, Serialize};

use super::{ComponentType, RollAxis, SaveType, Skill, VehicleAttribute};

/// Whether a check belongs to the vehicle as a whole or to one of its crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckDomain {
    /// Resolved by the narrator against the vehicle, no crew involvement
    Vehicle,
    /// Made by a specific crew member
    Character,
}

/// Specification for a check (skill check, vehicle check or attack).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSpec {
    pub domain: CheckDomain,
    pub axis: RollAxis,
    /// When set, the check cannot proceed without an operational component of this type.
    #[serde(default)]
    pub required_component: Option<ComponentType>,
    /// Used only in failure messages
    pub display_name: String,
}

impl CheckSpec {
    /// A check against the vehicle as a whole.
    pub fn vehicle(attribute: VehicleAttribute, display_name: impl Into<String>) -> Self {
        Self {
            domain: CheckDomain::Vehicle,
            axis: RollAxis::Vehicle(attribute),
            required_component: None,
            display_name: display_name.into(),
        }
    }

    /// A crew skill check.
    pub fn skill(skill: Skill, display_name: impl Into<String>) -> Self {
        Self {
            domain: CheckDomain::Character,
            axis: RollAxis::Skill(skill),
            required_component: None,
            display_name: display_name.into(),
        }
    }

    pub fn requiring(mut self, component_type: ComponentType) -> Self {
        self.required_component = Some(component_type);
        self
    }
}

/// Specification for a saving throw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSpec {
    pub domain: CheckDomain,
    pub save: SaveType,
    #[serde(default)]
    pub required_component: Option<ComponentType>,
    pub display_name: String,
}

impl SaveSpec {
    pub fn vehicle(save: SaveType, display_name: impl Into<String>) -> Self {
        Self {
            domain: CheckDomain::Vehicle,
            save,
            required_component: None,
            display_name: display_name.into(),
        }
    }

    pub fn character(save: SaveType, display_name: impl Into<String>) -> Self {
        Self {
            domain: CheckDomain::Character,
            save,
            required_component: None,
            display_name: display_name.into(),
        }
    }

    pub fn requiring(mut self, component_type: ComponentType) -> Self {
        self.required_component = Some(component_type);
        self
    }

    /// Axis a vehicle-domain save is rolled on.
    pub fn vehicle_axis(&self) -> RollAxis {
        RollAxis::Vehicle(self.save.vehicle_attribute())
    }

    /// Axis a crew member resists with.
    pub fn character_axis(&self) -> RollAxis {
        RollAxis::Ability(self.save.character_attribute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Attribute;

    #[test]
    fn test_skill_spec_builder() {
        let spec = CheckSpec::skill(Skill::Gunnery, "Fire main gun").requiring(ComponentType::Weapon);
        assert_eq!(spec.domain, CheckDomain::Character);
        assert_eq!(spec.axis, RollAxis::Skill(Skill::Gunnery));
        assert_eq!(spec.required_component, Some(ComponentType::Weapon));
    }

    #[test]
    fn test_save_axes() {
        let spec = SaveSpec::character(SaveType::Stability, "Hold on");
        assert_eq!(spec.character_axis(), RollAxis::Ability(Attribute::Con));
        assert_eq!(
            spec.vehicle_axis(),
            RollAxis::Vehicle(VehicleAttribute::Mobility)
        );
    }

    #[test]
    fn test_spec_deserializes_without_component() {
        let json = r#"{
            "domain": "vehicle",
            "axis": {"kind": "vehicle", "value": "mobility"},
            "displayName": "Jump the ravine"
        }"#;
        let spec: CheckSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.domain, CheckDomain::Vehicle);
        assert_eq!(spec.required_component, None);
    }
}
