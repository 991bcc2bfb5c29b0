//! Crew skills and saving throw types, with their fixed attribute mappings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Attribute, VehicleAttribute};
use crate::DomainError;

/// Skills a crew member can be proficient in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Piloting,
    Gunnery,
    Mechanics,
    Electronics,
    Perception,
    Medicine,
    Athletics,
    Intimidation,
}

impl Skill {
    /// The ability score that drives this skill.
    pub fn primary_attribute(&self) -> Attribute {
        match self {
            Self::Piloting | Self::Gunnery => Attribute::Dex,
            Self::Mechanics | Self::Electronics => Attribute::Int,
            Self::Perception | Self::Medicine => Attribute::Wis,
            Self::Athletics => Attribute::Str,
            Self::Intimidation => Attribute::Cha,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Piloting => "Piloting",
            Self::Gunnery => "Gunnery",
            Self::Mechanics => "Mechanics",
            Self::Electronics => "Electronics",
            Self::Perception => "Perception",
            Self::Medicine => "Medicine",
            Self::Athletics => "Athletics",
            Self::Intimidation => "Intimidation",
        }
    }

    pub fn all() -> [Skill; 8] {
        [
            Self::Piloting,
            Self::Gunnery,
            Self::Mechanics,
            Self::Electronics,
            Self::Perception,
            Self::Medicine,
            Self::Athletics,
            Self::Intimidation,
        ]
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|skill| skill.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// Kinds of saving throw.
///
/// Unknown names deserialize to [`SaveType::Other`], which maps onto the
/// default axes instead of failing lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveType {
    /// Dodging incoming fire or hazards
    Evasion,
    /// Keeping control through rough terrain or shockwaves
    Stability,
    /// Bracing against a collision or blast
    Impact,
    /// Forward-compatibility fallback for newer save types.
    #[serde(other)]
    Other,
}

impl SaveType {
    /// Vehicle attribute consulted for modifier lookup.
    ///
    /// Every current save resolves against mobility; it is also the default.
    pub fn vehicle_attribute(&self) -> VehicleAttribute {
        match self {
            Self::Evasion | Self::Stability | Self::Impact => VehicleAttribute::Mobility,
            Self::Other => VehicleAttribute::Mobility,
        }
    }

    /// Ability score a crew member resists with.
    pub fn character_attribute(&self) -> Attribute {
        match self {
            Self::Evasion => Attribute::Dex,
            Self::Stability => Attribute::Con,
            Self::Impact => Attribute::Str,
            Self::Other => Attribute::Dex,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Evasion => "Evasion",
            Self::Stability => "Stability",
            Self::Impact => "Impact",
            Self::Other => "Save",
        }
    }
}

impl fmt::Display for SaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_attribute() {
        assert_eq!(Skill::Piloting.primary_attribute(), Attribute::Dex);
        assert_eq!(Skill::Mechanics.primary_attribute(), Attribute::Int);
        assert_eq!(Skill::Intimidation.primary_attribute(), Attribute::Cha);
    }

    #[test]
    fn test_skill_from_str() {
        assert_eq!(Skill::from_str("gunnery"), Ok(Skill::Gunnery));
        assert_eq!(Skill::from_str(" Piloting "), Ok(Skill::Piloting));
        assert!(Skill::from_str("juggling").is_err());
    }

    #[test]
    fn test_saves_map_to_mobility() {
        assert_eq!(SaveType::Evasion.vehicle_attribute(), VehicleAttribute::Mobility);
        assert_eq!(SaveType::Impact.vehicle_attribute(), VehicleAttribute::Mobility);
        assert_eq!(SaveType::Other.vehicle_attribute(), VehicleAttribute::Mobility);
    }

    #[test]
    fn test_unknown_save_deserializes_to_other() {
        let save: SaveType = serde_json::from_str("\"radiation\"").unwrap();
        assert_eq!(save, SaveType::Other);
        assert_eq!(save.character_attribute(), Attribute::Dex);
    }
}
