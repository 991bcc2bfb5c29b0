//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Persistent stat modifiers (owned by the stat-tracking layer)
//! - The combat log / history store
//! - Random (for testing and replay)

mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{CombatLogSink, ModifierSourcePort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCombatLogSink, MockModifierSourcePort};

#[cfg(test)]
pub use testing::MockRandomPort;
