//! Axes that rolls and modifier lookups are keyed on.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Attribute, Skill, VehicleAttribute};

/// Key for persistent modifier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StatAxis {
    Vehicle(VehicleAttribute),
    Ability(Attribute),
    Skill(Skill),
}

impl fmt::Display for StatAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vehicle(attr) => write!(f, "{}", attr),
            Self::Ability(attr) => write!(f, "{}", attr.display_name()),
            Self::Skill(skill) => write!(f, "{}", skill),
        }
    }
}

/// What a check tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RollAxis {
    Vehicle(VehicleAttribute),
    Skill(Skill),
    Ability(Attribute),
}

impl RollAxis {
    /// Modifier lookup axis for this roll.
    pub fn stat_axis(&self) -> StatAxis {
        match *self {
            Self::Vehicle(attr) => StatAxis::Vehicle(attr),
            Self::Skill(skill) => StatAxis::Skill(skill),
            Self::Ability(attr) => StatAxis::Ability(attr),
        }
    }

    /// Ability score a crew member rolls with.
    pub fn character_attribute(&self) -> Option<Attribute> {
        match self {
            Self::Vehicle(_) => None,
            Self::Skill(skill) => Some(skill.primary_attribute()),
            Self::Ability(attr) => Some(*attr),
        }
    }

    pub fn skill(&self) -> Option<Skill> {
        match self {
            Self::Skill(skill) => Some(*skill),
            _ => None,
        }
    }

    pub fn vehicle_attribute(&self) -> Option<VehicleAttribute> {
        match self {
            Self::Vehicle(attr) => Some(*attr),
            _ => None,
        }
    }
}

impl fmt::Display for RollAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.stat_axis(), f)
    }
}
