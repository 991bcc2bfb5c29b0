//! In-memory store of persistent stat modifiers.
//!
//! Stands in for the stat-tracking layer in tests and the demo binary.

use dashmap::DashMap;

use crewroll_domain::{EntityRef, StatAxis, StatModifier, StatModifierId};

use crate::infrastructure::ports::ModifierSourcePort;

/// A concurrent modifier table keyed by subject and axis.
///
/// Each key holds its own `Vec`, so modifiers come back in insertion order.
#[derive(Default)]
pub struct InMemoryModifierStore {
    entries: DashMap<(EntityRef, StatAxis), Vec<StatModifier>>,
}

impl InMemoryModifierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a modifier and return its id.
    pub fn add(&self, subject: EntityRef, axis: StatAxis, modifier: StatModifier) -> StatModifierId {
        let id = modifier.id;
        self.entries.entry((subject, axis)).or_default().push(modifier);
        id
    }

    /// Remove a modifier wherever it is. Returns whether anything was removed.
    pub fn remove(&self, id: StatModifierId) -> bool {
        let mut removed = false;
        for mut entry in self.entries.iter_mut() {
            let modifiers = entry.value_mut();
            let before = modifiers.len();
            modifiers.retain(|m| m.id != id);
            removed |= modifiers.len() != before;
        }
        self.entries.retain(|_, modifiers| !modifiers.is_empty());
        removed
    }

    /// Toggle a modifier without removing it. Returns whether it was found.
    pub fn set_active(&self, id: StatModifierId, active: bool) -> bool {
        for mut entry in self.entries.iter_mut() {
            if let Some(modifier) = entry.value_mut().iter_mut().find(|m| m.id == id) {
                modifier.active = active;
                return true;
            }
        }
        false
    }

    /// Every modifier (active or not) on a subject/axis.
    pub fn all_for(&self, subject: &EntityRef, axis: StatAxis) -> Vec<StatModifier> {
        self.entries
            .get(&(*subject, axis))
            .map(|modifiers| modifiers.value().clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl ModifierSourcePort for InMemoryModifierStore {
    fn active_modifiers(&self, subject: &EntityRef, axis: StatAxis) -> Vec<StatModifier> {
        self.entries
            .get(&(*subject, axis))
            .map(|modifiers| modifiers.iter().filter(|m| m.active).cloned().collect())
            .unwrap_or_default()
    }
}
