//! Combat session composition.
//!
//! Wires the router, modifier aggregator, roll engine and event bus together
//! and runs the full attempt flow: route, gather bonuses, roll, report.

use std::sync::Arc;

use crewroll_domain::{
    ActionId, CauseRef, CharacterId, CheckDomain, CheckSpec, CombatEvent, Component, ComponentId,
    CrewMember, EntityRef, RollBonus, RollOutcome, SaveSpec, StatAxis, Vehicle, VehicleAttribute,
};

use crate::infrastructure::ports::{CombatLogSink, ModifierSourcePort, RandomPort};
use crate::infrastructure::settings::EngineSettings;
use crate::use_cases::{
    ActionEventBus, ActionRouter, ModifierAggregator, Resolution, RollEngine, RoutedSubject,
    RoutingFailure,
};

/// Result of one check, save or attack attempt.
///
/// A blocked attempt carries an auto-fail outcome and the routing failure;
/// nothing was drawn and nothing was reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub outcome: RollOutcome,
    pub failure: Option<RoutingFailure>,
    pub character: Option<CharacterId>,
    pub component: Option<ComponentId>,
}

impl Attempt {
    fn blocked(failure: RoutingFailure, target_value: i32) -> Self {
        Self {
            outcome: RollEngine::auto_fail(target_value),
            failure: Some(failure),
            character: None,
            component: None,
        }
    }

    fn rolled(subject: RoutedSubject<'_>, outcome: RollOutcome) -> Self {
        Self {
            outcome,
            failure: None,
            character: subject.character.map(CrewMember::id),
            component: subject.component.map(Component::id),
        }
    }

    pub fn can_attempt(&self) -> bool {
        self.failure.is_none()
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.success()
    }

    pub fn failure_reason(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }
}

/// One combat's worth of rolling and reporting.
///
/// Owns its own event bus, so independent sessions never see each other's
/// open actions.
pub struct CombatSession {
    router: ActionRouter,
    modifiers: ModifierAggregator,
    roll: RollEngine,
    bus: ActionEventBus,
}

impl CombatSession {
    pub fn new(
        random: Arc<dyn RandomPort>,
        modifiers: Arc<dyn ModifierSourcePort>,
        sink: Arc<dyn CombatLogSink>,
    ) -> Self {
        Self {
            router: ActionRouter::new(),
            modifiers: ModifierAggregator::new(modifiers),
            roll: RollEngine::new(random),
            bus: ActionEventBus::new(sink),
        }
    }

    /// Session whose randomness follows the configured seed, if any.
    pub fn from_settings(
        settings: &EngineSettings,
        modifiers: Arc<dyn ModifierSourcePort>,
        sink: Arc<dyn CombatLogSink>,
    ) -> Self {
        Self::new(settings.random(), modifiers, sink)
    }

    pub fn router(&self) -> &ActionRouter {
        &self.router
    }

    pub fn bus(&self) -> &ActionEventBus {
        &self.bus
    }

    /// Skill or vehicle check against `dc`. Reports a `SkillCheck` event.
    pub fn attempt_skill_check(
        &mut self,
        vehicle: Option<&Vehicle>,
        spec: &CheckSpec,
        dc: i32,
        initiating: Option<&CrewMember>,
        cause: CauseRef,
        target: Option<EntityRef>,
    ) -> Attempt {
        let Some(vehicle) = vehicle else {
            return self.blocked(&spec.display_name, RoutingFailure::NoVehicle, dc);
        };
        let subject = match self.router.route_skill_check(Some(vehicle), spec, initiating) {
            Resolution::Ready(subject) => subject,
            Resolution::Blocked(failure) => return self.blocked(&spec.display_name, failure, dc),
        };

        let bonuses = self.check_bonuses(spec, subject);
        let outcome = self.roll_d20(&spec.display_name, bonuses, dc);

        self.bus.emit(CombatEvent::SkillCheck {
            source: actor_ref(vehicle, subject),
            target,
            cause,
            outcome: outcome.clone(),
            success: outcome.success(),
        });
        Attempt::rolled(subject, outcome)
    }

    /// Saving throw against `dc`, caused by `source`. Reports a `SavingThrow`.
    ///
    /// `hint` is the component that was hit, if the threat had a location.
    pub fn attempt_save(
        &mut self,
        vehicle: Option<&Vehicle>,
        spec: &SaveSpec,
        dc: i32,
        hint: Option<&Component>,
        cause: CauseRef,
        source: EntityRef,
    ) -> Attempt {
        let Some(vehicle) = vehicle else {
            return self.blocked(&spec.display_name, RoutingFailure::NoVehicle, dc);
        };
        let subject = match self.router.route_save(Some(vehicle), spec, hint) {
            Resolution::Ready(subject) => subject,
            Resolution::Blocked(failure) => return self.blocked(&spec.display_name, failure, dc),
        };

        let bonuses = self.save_bonuses(spec, subject);
        let outcome = self.roll_d20(&spec.display_name, bonuses, dc);

        self.bus.emit(CombatEvent::SavingThrow {
            source,
            target: actor_ref(vehicle, subject),
            cause,
            save: spec.save,
            outcome: outcome.clone(),
            success: outcome.success(),
        });
        Attempt::rolled(subject, outcome)
    }

    /// Attack roll against `target_defense`. Reports an `AttackRoll`.
    ///
    /// `spec` usually requires a weapon, which puts the weapon's operator
    /// behind the trigger.
    pub fn attempt_attack(
        &mut self,
        vehicle: Option<&Vehicle>,
        spec: &CheckSpec,
        target_defense: i32,
        initiating: Option<&CrewMember>,
        cause: CauseRef,
        target: EntityRef,
    ) -> Attempt {
        let Some(vehicle) = vehicle else {
            return self.blocked(&spec.display_name, RoutingFailure::NoVehicle, target_defense);
        };
        let subject = match self.router.route_skill_check(Some(vehicle), spec, initiating) {
            Resolution::Ready(subject) => subject,
            Resolution::Blocked(failure) => {
                return self.blocked(&spec.display_name, failure, target_defense)
            }
        };

        let bonuses = self.check_bonuses(spec, subject);
        let outcome = self.roll_d20(&spec.display_name, bonuses, target_defense);

        self.bus.emit(CombatEvent::AttackRoll {
            source: actor_ref(vehicle, subject),
            target,
            cause,
            outcome: outcome.clone(),
            hit: outcome.success(),
        });
        Attempt::rolled(subject, outcome)
    }

    // =========================================================================
    // Action scoping
    // =========================================================================

    pub fn begin_action(
        &mut self,
        actor: EntityRef,
        cause: CauseRef,
        primary_target: Option<EntityRef>,
    ) -> ActionId {
        self.bus.begin_action(actor, cause, primary_target)
    }

    pub fn end_action(&mut self) -> Option<ActionId> {
        self.bus.end_action()
    }

    pub fn emit(&mut self, event: impl Into<Option<CombatEvent>>) {
        self.bus.emit(event);
    }

    /// Run `f` inside a fresh action; every frame it leaves open is closed.
    pub fn within_action<R>(
        &mut self,
        actor: EntityRef,
        cause: CauseRef,
        primary_target: Option<EntityRef>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let outer_depth = self.bus.depth();
        self.bus.begin_action(actor, cause, primary_target);

        let result = f(self);

        while self.bus.depth() > outer_depth {
            self.bus.end_action();
        }
        result
    }

    /// Drop open actions without reporting them.
    pub fn reset(&mut self) {
        self.bus.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn roll_d20(
        &self,
        display_name: &str,
        bonuses: Vec<RollBonus>,
        target_value: i32,
    ) -> RollOutcome {
        let outcome = self.roll.roll(bonuses, target_value);
        tracing::debug!(
            attempt = display_name,
            base_roll = outcome.base_roll(),
            total_modifier = outcome.total_modifier(),
            total = outcome.total(),
            target = outcome.target_value(),
            success = outcome.success(),
            "Rolled d20"
        );
        outcome
    }

    fn blocked(&self, display_name: &str, failure: RoutingFailure, target_value: i32) -> Attempt {
        tracing::info!(attempt = display_name, reason = %failure, "Attempt not possible");
        Attempt::blocked(failure, target_value)
    }

    fn check_bonuses(&self, spec: &CheckSpec, subject: RoutedSubject<'_>) -> Vec<RollBonus> {
        match (spec.domain, subject.character) {
            (CheckDomain::Character, Some(character)) => {
                let mut bonuses = self.modifiers.gather_check_bonuses(character, spec.axis);
                bonuses.extend(self.component_applied(subject.component, spec.axis.stat_axis()));
                bonuses
            }
            _ => self.vehicle_bonuses(
                subject.component,
                spec.axis.vehicle_attribute().unwrap_or(VehicleAttribute::Mobility),
            ),
        }
    }

    fn save_bonuses(&self, spec: &SaveSpec, subject: RoutedSubject<'_>) -> Vec<RollBonus> {
        match (spec.domain, subject.character) {
            (CheckDomain::Character, Some(character)) => {
                let mut bonuses = self.modifiers.gather_save_bonuses(character, spec.save);
                bonuses.extend(
                    self.component_applied(subject.component, spec.character_axis().stat_axis()),
                );
                bonuses
            }
            _ => self.vehicle_bonuses(subject.component, spec.save.vehicle_attribute()),
        }
    }

    fn vehicle_bonuses(
        &self,
        component: Option<&Component>,
        attribute: VehicleAttribute,
    ) -> Vec<RollBonus> {
        match component {
            Some(component) => {
                let label = format!("{} {}", component.name(), attribute);
                self.modifiers
                    .gather_component_bonuses(component, attribute, &label)
            }
            None => Vec::new(),
        }
    }

    fn component_applied(&self, component: Option<&Component>, axis: StatAxis) -> Vec<RollBonus> {
        let subject = component.map(|component| EntityRef::Component(component.id()));
        self.modifiers.gather_applied_bonuses(subject.as_ref(), axis)
    }
}

/// Who rolled: the crew member, else the vehicle itself.
fn actor_ref(vehicle: &Vehicle, subject: RoutedSubject<'_>) -> EntityRef {
    match subject.character {
        Some(character) => EntityRef::Character(character.id()),
        None => EntityRef::Vehicle(vehicle.id()),
    }
}
