//! Stat value objects - the character abilities and vehicle attributes that
//! checks and saves are rolled against.
//!
//! Provides type safety for stat references instead of using magic strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Crew member ability scores used in skill checks and saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    /// Strength - physical power
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Attribute {
    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Returns the full name of the attribute (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    pub fn all() -> [Attribute; 6] {
        [
            Self::Str,
            Self::Dex,
            Self::Con,
            Self::Int,
            Self::Wis,
            Self::Cha,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIS" | "WISDOM" => Ok(Self::Wis),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// Attributes of the vehicle as a whole, resolved without crew involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleAttribute {
    /// Handling, speed and evasiveness (carried by the chassis)
    Mobility,
    /// Hull toughness
    Structure,
    /// Onboard power and electronics
    Systems,
    /// Detection range and clarity
    Sensors,
}

impl VehicleAttribute {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mobility => "Mobility",
            Self::Structure => "Structure",
            Self::Systems => "Systems",
            Self::Sensors => "Sensors",
        }
    }
}

impl fmt::Display for VehicleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VehicleAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobility" => Ok(Self::Mobility),
            "structure" => Ok(Self::Structure),
            "systems" => Ok(Self::Systems),
            "sensors" => Ok(Self::Sensors),
            _ => Err(DomainError::parse(format!("Unknown vehicle attribute: {}", s))),
        }
    }
}
