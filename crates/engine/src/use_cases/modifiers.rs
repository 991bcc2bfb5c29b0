//! Turns persistent modifiers into the labeled bonuses of one roll.

use std::sync::Arc;

use crewroll_domain::{
    Component, CrewMember, EntityRef, RollAxis, RollBonus, SaveType, StatAxis, VehicleAttribute,
};

use crate::infrastructure::ports::ModifierSourcePort;

/// Gathers [`RollBonus`]es for a subject along an axis.
///
/// Zero-valued contributions never appear in a breakdown. Intrinsic bonuses
/// (a component's base value, a crew member's ability and training) always
/// come before applied ones.
#[derive(Clone)]
pub struct ModifierAggregator {
    source: Arc<dyn ModifierSourcePort>,
}

impl ModifierAggregator {
    pub fn new(source: Arc<dyn ModifierSourcePort>) -> Self {
        Self { source }
    }

    /// Active modifiers on `subject` along `axis`. Empty when there is no subject.
    pub fn gather_applied_bonuses(&self, subject: Option<&EntityRef>, axis: StatAxis) -> Vec<RollBonus> {
        let Some(subject) = subject else {
            return Vec::new();
        };

        self.source
            .active_modifiers(subject, axis)
            .into_iter()
            .filter(|modifier| modifier.value != 0)
            .map(|modifier| RollBonus::new(modifier.source, modifier.value))
            .collect()
    }

    /// The component's own base value for `attribute`, then its applied modifiers.
    pub fn gather_component_bonuses(
        &self,
        component: &Component,
        attribute: VehicleAttribute,
        label: &str,
    ) -> Vec<RollBonus> {
        let mut bonuses = Vec::new();

        let base = component.base_value(attribute);
        if base != 0 {
            bonuses.push(RollBonus::new(label, base));
        }

        bonuses.extend(self.gather_applied_bonuses(
            Some(&EntityRef::Component(component.id())),
            StatAxis::Vehicle(attribute),
        ));
        bonuses
    }

    /// Ability modifier and proficiency for a crew check, then applied modifiers.
    pub fn gather_check_bonuses(&self, character: &CrewMember, axis: RollAxis) -> Vec<RollBonus> {
        let mut bonuses = Vec::new();

        if let Some(attribute) = axis.character_attribute() {
            push_nonzero(
                &mut bonuses,
                format!("{} modifier", attribute.display_name()),
                character.attribute_modifier(attribute),
            );
        }
        if let Some(skill) = axis.skill() {
            push_nonzero(&mut bonuses, "Proficiency", character.proficiency_bonus_for(skill));
        }

        bonuses.extend(self.gather_applied_bonuses(
            Some(&EntityRef::Character(character.id())),
            axis.stat_axis(),
        ));
        bonuses
    }

    /// Ability modifier and level bonus for a crew save, then applied modifiers.
    pub fn gather_save_bonuses(&self, character: &CrewMember, save: SaveType) -> Vec<RollBonus> {
        let attribute = save.character_attribute();
        let mut bonuses = Vec::new();

        push_nonzero(
            &mut bonuses,
            format!("{} modifier", attribute.display_name()),
            character.attribute_modifier(attribute),
        );
        push_nonzero(
            &mut bonuses,
            "Level bonus",
            character.save_modifier(attribute) - character.attribute_modifier(attribute),
        );

        bonuses.extend(self.gather_applied_bonuses(
            Some(&EntityRef::Character(character.id())),
            StatAxis::Ability(attribute),
        ));
        bonuses
    }
}

fn push_nonzero(bonuses: &mut Vec<RollBonus>, label: impl Into<String>, value: i32) {
    if value != 0 {
        bonuses.push(RollBonus::new(label, value));
    }
}
