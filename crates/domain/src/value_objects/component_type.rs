use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Kind of vehicle subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// The frame every other component hangs off. Exactly one per vehicle.
    Chassis,
    Engine,
    Weapon,
    Sensors,
    Shields,
    Comms,
}

impl ComponentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chassis => "Chassis",
            Self::Engine => "Engine",
            Self::Weapon => "Weapon",
            Self::Sensors => "Sensors",
            Self::Shields => "Shields",
            Self::Comms => "Comms",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ComponentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chassis" => Ok(Self::Chassis),
            "engine" => Ok(Self::Engine),
            "weapon" => Ok(Self::Weapon),
            "sensors" | "sensor" => Ok(Self::Sensors),
            "shields" | "shield" => Ok(Self::Shields),
            "comms" => Ok(Self::Comms),
            _ => Err(DomainError::parse(format!("Unknown component type: {}", s))),
        }
    }
}
