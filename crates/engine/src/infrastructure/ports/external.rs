//! Ports for the collaborators that own state this engine only reads or feeds.

use crewroll_domain::{CombatAction, CombatEvent, EntityRef, StatAxis, StatModifier};

// =============================================================================
// Stat/Modifier Source
// =============================================================================

/// Stat-tracking collaborator holding persistent modifiers (equipment,
/// status effects, damage penalties).
#[cfg_attr(test, mockall::automock)]
pub trait ModifierSourcePort: Send + Sync {
    /// Active modifiers on `subject` along `axis`, in the order they apply.
    fn active_modifiers(&self, subject: &EntityRef, axis: StatAxis) -> Vec<StatModifier>;
}

// =============================================================================
// Combat Log Sink
// =============================================================================

/// Downstream consumer of completed actions and standalone events.
///
/// Ownership moves into the sink; the engine never looks at a delivered
/// unit again.
#[cfg_attr(test, mockall::automock)]
pub trait CombatLogSink: Send + Sync {
    fn record_action(&self, action: CombatAction);

    fn record_event(&self, event: CombatEvent);
}
