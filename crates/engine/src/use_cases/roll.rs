//! The d20 roll.
//!
//! Domain-agnostic: no knowledge of vehicles, crews or what a success means.
//! Silent; callers trace the outcomes they care about.

use std::sync::Arc;

use crewroll_domain::{RollBonus, RollOutcome, D20_FACES};

use crate::infrastructure::ports::RandomPort;

/// Rolls a d20 against a target value.
///
/// Each [`RollEngine::roll`] consumes exactly one draw from the random port;
/// [`RollEngine::auto_fail`] consumes none, so blocked attempts never shift
/// the sequence later rolls see.
#[derive(Clone)]
pub struct RollEngine {
    random: Arc<dyn RandomPort>,
}

impl RollEngine {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn roll(&self, bonuses: Vec<RollBonus>, target_value: i32) -> RollOutcome {
        // Clamp so a misbehaving port can't produce an impossible face
        let base_roll = self.random.gen_range(1, D20_FACES).clamp(1, D20_FACES);
        RollOutcome::evaluate(base_roll, bonuses, target_value)
    }

    /// Outcome for an attempt that cannot happen. Draws nothing.
    pub fn auto_fail(target_value: i32) -> RollOutcome {
        RollOutcome::auto_fail(target_value)
    }
}
