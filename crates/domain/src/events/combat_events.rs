//! Combat events
//!
//! One closed set of things that can happen in combat. Each event names who
//! caused it, who it happened to and what brought it about, so the history
//! layer can report it without any further lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{RollOutcome, SaveType, Skill};
use crate::{ActionId, CharacterId, ComponentId, VehicleId};

/// Any entity that can act or be acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Vehicle(VehicleId),
    Component(ComponentId),
    Character(CharacterId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vehicle(id) => write!(f, "vehicle:{}", id),
            Self::Component(id) => write!(f, "component:{}", id),
            Self::Character(id) => write!(f, "character:{}", id),
        }
    }
}

/// What brought an event about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CauseRef {
    Skill(Skill),
    Component(ComponentId),
    StatusEffect(String),
    Environment(String),
}

impl fmt::Display for CauseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill(skill) => write!(f, "skill:{}", skill),
            Self::Component(id) => write!(f, "component:{}", id),
            Self::StatusEffect(name) => write!(f, "status:{}", name),
            Self::Environment(name) => write!(f, "environment:{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Kinetic,
    Thermal,
    Energy,
    Collision,
}

/// Discriminant of [`CombatEvent`], for filtering and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatEventKind {
    Damage,
    StatusEffectApplied,
    StatusEffectExpired,
    Restoration,
    AttackRoll,
    SavingThrow,
    SkillCheck,
}

/// A single thing that happened in combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CombatEvent {
    #[serde(rename_all = "camelCase")]
    Damage {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        amount: u32,
        damage_type: DamageType,
    },
    #[serde(rename_all = "camelCase")]
    StatusEffectApplied {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        effect: String,
        duration_turns: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    StatusEffectExpired {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        effect: String,
    },
    /// Repair or healing
    #[serde(rename_all = "camelCase")]
    Restoration {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        amount: u32,
    },
    #[serde(rename_all = "camelCase")]
    AttackRoll {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        outcome: RollOutcome,
        hit: bool,
    },
    #[serde(rename_all = "camelCase")]
    SavingThrow {
        source: EntityRef,
        target: EntityRef,
        cause: CauseRef,
        save: SaveType,
        outcome: RollOutcome,
        success: bool,
    },
    #[serde(rename_all = "camelCase")]
    SkillCheck {
        source: EntityRef,
        target: Option<EntityRef>,
        cause: CauseRef,
        outcome: RollOutcome,
        success: bool,
    },
}

impl CombatEvent {
    pub fn kind(&self) -> CombatEventKind {
        match self {
            Self::Damage { .. } => CombatEventKind::Damage,
            Self::StatusEffectApplied { .. } => CombatEventKind::StatusEffectApplied,
            Self::StatusEffectExpired { .. } => CombatEventKind::StatusEffectExpired,
            Self::Restoration { .. } => CombatEventKind::Restoration,
            Self::AttackRoll { .. } => CombatEventKind::AttackRoll,
            Self::SavingThrow { .. } => CombatEventKind::SavingThrow,
            Self::SkillCheck { .. } => CombatEventKind::SkillCheck,
        }
    }

    pub fn source(&self) -> EntityRef {
        match self {
            Self::Damage { source, .. }
            | Self::StatusEffectApplied { source, .. }
            | Self::StatusEffectExpired { source, .. }
            | Self::Restoration { source, .. }
            | Self::AttackRoll { source, .. }
            | Self::SavingThrow { source, .. }
            | Self::SkillCheck { source, .. } => *source,
        }
    }

    /// Affected entity. Only skill checks may have none.
    pub fn target(&self) -> Option<EntityRef> {
        match self {
            Self::Damage { target, .. }
            | Self::StatusEffectApplied { target, .. }
            | Self::StatusEffectExpired { target, .. }
            | Self::Restoration { target, .. }
            | Self::AttackRoll { target, .. }
            | Self::SavingThrow { target, .. } => Some(*target),
            Self::SkillCheck { target, .. } => *target,
        }
    }

    pub fn cause(&self) -> &CauseRef {
        match self {
            Self::Damage { cause, .. }
            | Self::StatusEffectApplied { cause, .. }
            | Self::StatusEffectExpired { cause, .. }
            | Self::Restoration { cause, .. }
            | Self::AttackRoll { cause, .. }
            | Self::SavingThrow { cause, .. }
            | Self::SkillCheck { cause, .. } => cause,
        }
    }

    /// The roll behind this event, if it was a roll.
    pub fn roll(&self) -> Option<&RollOutcome> {
        match self {
            Self::AttackRoll { outcome, .. }
            | Self::SavingThrow { outcome, .. }
            | Self::SkillCheck { outcome, .. } => Some(outcome),
            Self::Damage { .. }
            | Self::StatusEffectApplied { .. }
            | Self::StatusEffectExpired { .. }
            | Self::Restoration { .. } => None,
        }
    }
}

/// Every event produced by one semantic action (e.g., "fire the main gun").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatAction {
    id: ActionId,
    actor: EntityRef,
    cause: CauseRef,
    primary_target: Option<EntityRef>,
    events: Vec<CombatEvent>,
}

impl CombatAction {
    pub fn new(actor: EntityRef, cause: CauseRef, primary_target: Option<EntityRef>) -> Self {
        Self {
            id: ActionId::new(),
            actor,
            cause,
            primary_target,
            events: Vec::new(),
        }
    }

    /// Append an event, preserving emission order.
    pub fn record(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn actor(&self) -> EntityRef {
        self.actor
    }

    pub fn cause(&self) -> &CauseRef {
        &self.cause
    }

    pub fn primary_target(&self) -> Option<EntityRef> {
        self.primary_target
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
