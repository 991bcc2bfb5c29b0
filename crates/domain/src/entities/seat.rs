//! Seats - where a crew member meets the subsystems they operate.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::CrewMember;
use crate::{ComponentId, SeatId};

/// Job a seat is fitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatRole {
    Pilot,
    Gunner,
    Engineer,
    Commander,
    Passenger,
}

impl fmt::Display for SeatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pilot => "Pilot",
            Self::Gunner => "Gunner",
            Self::Engineer => "Engineer",
            Self::Commander => "Commander",
            Self::Passenger => "Passenger",
        };
        f.write_str(name)
    }
}

/// Binds at most one crew member to the components the seat controls.
///
/// The occupant is shared, not owned: the same crew member record lives on
/// the roster elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    id: SeatId,
    name: String,
    #[serde(default)]
    roles: Vec<SeatRole>,
    #[serde(default)]
    controls: Vec<ComponentId>,
    #[serde(default)]
    occupant: Option<Arc<CrewMember>>,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SeatId::new(),
            name: name.into(),
            roles: Vec::new(),
            controls: Vec::new(),
            occupant: None,
        }
    }

    pub fn with_id(mut self, id: SeatId) -> Self {
        self.id = id;
        self
    }

    pub fn with_role(mut self, role: SeatRole) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    pub fn controlling(mut self, component_id: ComponentId) -> Self {
        if !self.controls.contains(&component_id) {
            self.controls.push(component_id);
        }
        self
    }

    pub fn with_occupant(mut self, crew: Arc<CrewMember>) -> Self {
        self.occupant = Some(crew);
        self
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> &[SeatRole] {
        &self.roles
    }

    pub fn has_role(&self, role: SeatRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn controlled_components(&self) -> &[ComponentId] {
        &self.controls
    }

    pub fn controls(&self, component_id: ComponentId) -> bool {
        self.controls.contains(&component_id)
    }

    pub fn assigned_character(&self) -> Option<&CrewMember> {
        self.occupant.as_deref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Seat a crew member, returning whoever was there before.
    pub fn assign(&mut self, crew: Arc<CrewMember>) -> Option<Arc<CrewMember>> {
        self.occupant.replace(crew)
    }

    pub fn vacate(&mut self) -> Option<Arc<CrewMember>> {
        self.occupant.take()
    }
}
