//! d20 roll value objects
//!
//! A [`RollOutcome`] is the auditable record of one d20 roll: the natural
//! roll, every labeled bonus that was added, and the verdict against the
//! target value. Drawing the natural roll is the engine's job; everything
//! here is pure arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on the die every check is rolled with.
pub const D20_FACES: i32 = 20;

/// A labeled contribution to a single roll (e.g., "Chassis Mobility +2").
///
/// Bonuses exist only inside one roll's breakdown; persistent modifiers live
/// with the stat-tracking collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollBonus {
    label: String,
    value: i32,
}

impl RollBonus {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for RollBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value < 0 {
            write!(f, "- {}({})", self.label, self.value.unsigned_abs())
        } else {
            write!(f, "+ {}({})", self.label, self.value)
        }
    }
}

/// How a roll landed, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollDegree {
    /// Natural 20
    CriticalSuccess,
    /// Met or beat the target
    Success,
    /// Fell short of the target
    Failure,
    /// Natural 1
    CriticalFailure,
    /// The attempt was never possible; no die was rolled
    Impossible,
}

/// Result of one d20 roll.
///
/// Invariants: `total == base_roll + total_modifier`,
/// `total_modifier == sum(bonuses)`, a crit always succeeds and a fumble
/// always fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    base_roll: i32,
    bonuses: Vec<RollBonus>,
    total_modifier: i32,
    total: i32,
    target_value: i32,
    success: bool,
    is_crit: bool,
    is_fumble: bool,
}

impl RollOutcome {
    /// Evaluate a natural roll against a target.
    ///
    /// A natural 20 succeeds no matter the target; a natural 1 fails no
    /// matter the modifiers.
    pub fn evaluate(base_roll: i32, bonuses: Vec<RollBonus>, target_value: i32) -> Self {
        // Saturate so oversized external modifiers can't panic a roll
        let total_modifier = bonuses
            .iter()
            .map(RollBonus::value)
            .fold(0i32, i32::saturating_add);
        let total = base_roll.saturating_add(total_modifier);
        let is_crit = base_roll == D20_FACES;
        let is_fumble = base_roll == 1;
        let success = is_crit || (!is_fumble && total >= target_value);

        Self {
            base_roll,
            bonuses,
            total_modifier,
            total,
            target_value,
            success,
            is_crit,
            is_fumble,
        }
    }

    /// Outcome for an attempt that could not happen. No die is rolled.
    pub fn auto_fail(target_value: i32) -> Self {
        Self {
            base_roll: 0,
            bonuses: Vec::new(),
            total_modifier: 0,
            total: 0,
            target_value,
            success: false,
            is_crit: false,
            is_fumble: false,
        }
    }

    pub fn base_roll(&self) -> i32 {
        self.base_roll
    }

    pub fn bonuses(&self) -> &[RollBonus] {
        &self.bonuses
    }

    pub fn total_modifier(&self) -> i32 {
        self.total_modifier
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn target_value(&self) -> i32 {
        self.target_value
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn is_crit(&self) -> bool {
        self.is_crit
    }

    pub fn is_fumble(&self) -> bool {
        self.is_fumble
    }

    /// True when this outcome stands in for an attempt that was never rolled.
    pub fn is_auto_fail(&self) -> bool {
        self.base_roll == 0
    }

    /// Distance between total and target (negative when short).
    pub fn margin(&self) -> i32 {
        self.total.saturating_sub(self.target_value)
    }

    pub fn degree(&self) -> RollDegree {
        if self.is_auto_fail() {
            RollDegree::Impossible
        } else if self.is_crit {
            RollDegree::CriticalSuccess
        } else if self.is_fumble {
            RollDegree::CriticalFailure
        } else if self.success {
            RollDegree::Success
        } else {
            RollDegree::Failure
        }
    }

    /// Format as a breakdown string (e.g., "d20(14) + Piloting(3) = 17 vs 15")
    pub fn breakdown(&self) -> String {
        if self.is_auto_fail() {
            return format!("auto-fail vs {}", self.target_value);
        }

        let mut parts = vec![format!("d20({})", self.base_roll)];
        parts.extend(self.bonuses.iter().map(ToString::to_string));
        format!(
            "{} = {} vs {}",
            parts.join(" "),
            self.total,
            self.target_value
        )
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.breakdown())
    }
}
