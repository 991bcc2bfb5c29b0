//! Crew members - the characters who sit in a vehicle's seats.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::rules;
use crate::value_objects::{Attribute, Skill};
use crate::CharacterId;

const DEFAULT_ABILITY_SCORE: i32 = 10;
const MAX_LEVEL: u8 = 20;

/// A character who can crew a vehicle.
///
/// Crew members know nothing about seats; a seat points at its occupant,
/// never the other way around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    id: CharacterId,
    name: String,
    level: u8,
    #[serde(default)]
    abilities: BTreeMap<Attribute, i32>,
    #[serde(default)]
    proficiencies: BTreeSet<Skill>,
}

impl CrewMember {
    /// A new crew member with every ability at 10. Level is clamped to 1..=20.
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            level: level.clamp(1, MAX_LEVEL),
            abilities: BTreeMap::new(),
            proficiencies: BTreeSet::new(),
        }
    }

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_ability(mut self, attribute: Attribute, score: i32) -> Self {
        self.abilities.insert(attribute, score);
        self
    }

    pub fn with_proficiency(mut self, skill: Skill) -> Self {
        self.proficiencies.insert(skill);
        self
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn ability_score(&self, attribute: Attribute) -> i32 {
        self.abilities
            .get(&attribute)
            .copied()
            .unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn attribute_modifier(&self, attribute: Attribute) -> i32 {
        rules::ability_modifier(self.ability_score(attribute))
    }

    pub fn is_proficient(&self, skill: Skill) -> bool {
        self.proficiencies.contains(&skill)
    }

    /// Proficiency bonus applied to a skill, 0 when not proficient.
    pub fn proficiency_bonus_for(&self, skill: Skill) -> i32 {
        if self.is_proficient(skill) {
            rules::proficiency_bonus(self.level)
        } else {
            0
        }
    }

    /// Attribute modifier plus proficiency; used to pick the best crew member.
    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        self.attribute_modifier(skill.primary_attribute()) + self.proficiency_bonus_for(skill)
    }

    /// Attribute modifier plus half level.
    pub fn save_modifier(&self, attribute: Attribute) -> i32 {
        self.attribute_modifier(attribute) + rules::half_level_bonus(self.level)
    }
}
