use serde::{Deserialize, Serialize};

use crate::StatModifierId;

/// A persistent modifier to a stat (from equipment, status effects, damage, etc.)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatModifier {
    /// Unique identifier for this modifier
    pub id: StatModifierId,
    /// Source of the modifier (e.g., "Reinforced plating", "Shaken", "Targeting computer")
    pub source: String,
    /// The value to add (positive) or subtract (negative)
    pub value: i32,
    /// Whether this modifier is currently active
    pub active: bool,
}

impl StatModifier {
    pub fn new(source: impl Into<String>, value: i32) -> Self {
        Self {
            id: StatModifierId::new(),
            source: source.into(),
            value,
            active: true,
        }
    }

    /// Create an inactive modifier (for tracking but not applying)
    pub fn inactive(source: impl Into<String>, value: i32) -> Self {
        Self {
            active: false,
            ..Self::new(source, value)
        }
    }
}
