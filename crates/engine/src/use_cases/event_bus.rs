//! Action-scoped event aggregation.
//!
//! Events emitted while an action is open are collected into that action and
//! delivered together when it ends. Events emitted outside any action go to
//! the sink straight away.

use std::sync::Arc;

use crewroll_domain::{ActionId, CauseRef, CombatAction, CombatEvent, EntityRef};

use crate::infrastructure::ports::CombatLogSink;

/// Stack of open actions in front of a combat log sink.
///
/// Owned by one combat session; independent sessions never share a bus.
pub struct ActionEventBus {
    sink: Arc<dyn CombatLogSink>,
    stack: Vec<CombatAction>,
}

impl ActionEventBus {
    pub fn new(sink: Arc<dyn CombatLogSink>) -> Self {
        Self {
            sink,
            stack: Vec::new(),
        }
    }

    /// Open a new action frame on top of the stack.
    pub fn begin_action(
        &mut self,
        actor: EntityRef,
        cause: CauseRef,
        primary_target: Option<EntityRef>,
    ) -> ActionId {
        let action = CombatAction::new(actor, cause, primary_target);
        let id = action.id();
        tracing::debug!(action_id = %id, actor = %actor, depth = self.stack.len() + 1, "Action opened");
        self.stack.push(action);
        id
    }

    /// Close the top frame and deliver it.
    ///
    /// Returns the delivered action's id, or `None` (with a warning) when no
    /// action is open.
    pub fn end_action(&mut self) -> Option<ActionId> {
        let Some(action) = self.stack.pop() else {
            tracing::warn!("end_action called with no open action");
            return None;
        };

        let id = action.id();
        tracing::debug!(action_id = %id, events = action.len(), "Action closed");
        self.sink.record_action(action);
        Some(id)
    }

    /// Record an event in the open action, or deliver it on its own.
    ///
    /// `None` is ignored with a warning.
    pub fn emit(&mut self, event: impl Into<Option<CombatEvent>>) {
        let Some(event) = event.into() else {
            tracing::warn!("Ignoring emit of an absent event");
            return;
        };

        match self.stack.last_mut() {
            Some(action) => action.record(event),
            None => self.sink.record_event(event),
        }
    }

    /// Drop every open frame without delivering it.
    ///
    /// Only for hard resets; anything recorded in the open frames is lost.
    pub fn clear(&mut self) {
        if !self.stack.is_empty() {
            let discarded_events: usize = self.stack.iter().map(CombatAction::len).sum();
            tracing::warn!(
                frames = self.stack.len(),
                events = discarded_events,
                "Discarding open actions"
            );
        }
        self.stack.clear();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_in_action(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The innermost open action.
    pub fn current_action(&self) -> Option<&CombatAction> {
        self.stack.last()
    }

    /// Run `f` inside a fresh action frame and close it afterwards.
    ///
    /// Frames `f` opens and leaves open are closed first, so the stack is
    /// back to its previous depth on return.
    pub fn within_action<R>(
        &mut self,
        actor: EntityRef,
        cause: CauseRef,
        primary_target: Option<EntityRef>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let outer_depth = self.stack.len();
        self.begin_action(actor, cause, primary_target);

        let result = f(self);

        if self.stack.len() <= outer_depth {
            tracing::warn!("Action closed inside within_action scope");
            return result;
        }
        while self.stack.len() > outer_depth + 1 {
            tracing::warn!("Closing action left open inside within_action scope");
            self.end_action();
        }
        self.end_action();
        result
    }
}

impl Drop for ActionEventBus {
    fn drop(&mut self) {
        if !self.stack.is_empty() {
            tracing::warn!(frames = self.stack.len(), "Event bus dropped with open actions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::combat_log::{InMemoryCombatLog, LogEntry};
    use crate::infrastructure::ports::MockCombatLogSink;
    use crewroll_domain::{
        CharacterId, ComponentId, DamageType, RollOutcome, Skill, VehicleId,
    };

    fn damage(amount: u32) -> CombatEvent {
        CombatEvent::Damage {
            source: EntityRef::Vehicle(VehicleId::new()),
            target: EntityRef::Component(ComponentId::new()),
            cause: CauseRef::Skill(Skill::Gunnery),
            amount,
            damage_type: DamageType::Kinetic,
        }
    }

    fn check() -> CombatEvent {
        CombatEvent::SkillCheck {
            source: EntityRef::Character(CharacterId::new()),
            target: None,
            cause: CauseRef::Skill(Skill::Mechanics),
            outcome: RollOutcome::evaluate(12, Vec::new(), 10),
            success: true,
        }
    }

    fn actor() -> EntityRef {
        EntityRef::Character(CharacterId::new())
    }

    fn bus_with_log() -> (ActionEventBus, Arc<InMemoryCombatLog>) {
        let log = Arc::new(InMemoryCombatLog::new());
        (ActionEventBus::new(log.clone()), log)
    }

    #[test]
    fn test_scoped_events_delivered_as_one_action() {
        let (mut bus, log) = bus_with_log();
        let (e1, e2) = (damage(4), damage(7));

        let id = bus.begin_action(actor(), CauseRef::Skill(Skill::Gunnery), None);
        bus.emit(e1.clone());
        bus.emit(e2.clone());
        assert!(log.is_empty());
        assert_eq!(bus.end_action(), Some(id));

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        let action = entries[0].as_action().unwrap();
        assert_eq!(action.id(), id);
        assert_eq!(action.events(), &[e1, e2]);
    }

    #[test]
    fn test_unscoped_event_dispatched_immediately() {
        let (mut bus, log) = bus_with_log();
        let event = damage(3);

        bus.emit(event.clone());

        assert_eq!(log.entries(), vec![LogEntry::Event(event)]);
    }

    #[test]
    fn test_event_goes_to_innermost_frame() {
        let (mut bus, log) = bus_with_log();

        let outer = bus.begin_action(actor(), CauseRef::Skill(Skill::Piloting), None);
        bus.emit(check());
        let inner = bus.begin_action(actor(), CauseRef::Skill(Skill::Gunnery), None);
        bus.emit(damage(5));
        bus.emit(damage(6));
        assert_eq!(bus.depth(), 2);
        bus.end_action();
        bus.end_action();

        let entries = log.drain();
        assert_eq!(entries.len(), 2);
        let first = entries[0].as_action().unwrap();
        let second = entries[1].as_action().unwrap();
        assert_eq!(first.id(), inner);
        assert_eq!(first.len(), 2);
        assert_eq!(second.id(), outer);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_end_action_on_empty_stack_is_noop() {
        let mut sink = MockCombatLogSink::new();
        sink.expect_record_action().never();
        sink.expect_record_event().never();
        let mut bus = ActionEventBus::new(Arc::new(sink));

        assert_eq!(bus.end_action(), None);
        assert_eq!(bus.depth(), 0);
    }

    #[test]
    fn test_absent_event_is_ignored() {
        let mut sink = MockCombatLogSink::new();
        sink.expect_record_action().never();
        sink.expect_record_event().never();
        let mut bus = ActionEventBus::new(Arc::new(sink));

        bus.emit(None);
        bus.begin_action(actor(), CauseRef::Environment("Dust storm".into()), None);
        bus.emit(None);

        assert_eq!(bus.current_action().map(CombatAction::len), Some(0));
        bus.clear();
    }

    #[test]
    fn test_each_action_delivered_exactly_once() {
        let mut sink = MockCombatLogSink::new();
        sink.expect_record_action()
            .withf(|action| action.len() == 1)
            .times(1)
            .return_const(());
        sink.expect_record_event().never();
        let mut bus = ActionEventBus::new(Arc::new(sink));

        bus.begin_action(actor(), CauseRef::Skill(Skill::Gunnery), None);
        bus.emit(damage(2));
        bus.end_action();
        bus.end_action();
    }

    #[test]
    fn test_clear_discards_open_frames() {
        let (mut bus, log) = bus_with_log();

        bus.begin_action(actor(), CauseRef::Skill(Skill::Gunnery), None);
        bus.emit(damage(9));
        bus.clear();

        assert!(!bus.is_in_action());
        assert_eq!(bus.end_action(), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_within_action_closes_frame() {
        let (mut bus, log) = bus_with_log();

        let depth_inside = bus.within_action(actor(), CauseRef::Skill(Skill::Gunnery), None, |bus| {
            bus.emit(damage(1));
            bus.emit(damage(2));
            bus.depth()
        });

        assert_eq!(depth_inside, 1);
        assert_eq!(bus.depth(), 0);
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_action().map(CombatAction::len), Some(2));
    }

    #[test]
    fn test_within_action_closes_frames_left_open() {
        let (mut bus, log) = bus_with_log();
        let outer = bus.begin_action(actor(), CauseRef::Skill(Skill::Piloting), None);

        bus.within_action(actor(), CauseRef::Skill(Skill::Gunnery), None, |bus| {
            bus.begin_action(actor(), CauseRef::Skill(Skill::Mechanics), None);
            bus.emit(damage(1));
        });

        assert_eq!(bus.depth(), 1);
        assert_eq!(bus.current_action().map(CombatAction::id), Some(outer));
        assert_eq!(log.len(), 2);
        bus.end_action();
    }

    #[test]
    fn test_primary_target_recorded_on_frame() {
        let (mut bus, _log) = bus_with_log();
        let target = EntityRef::Vehicle(VehicleId::new());

        bus.begin_action(actor(), CauseRef::Skill(Skill::Gunnery), Some(target));

        assert_eq!(
            bus.current_action().and_then(CombatAction::primary_target),
            Some(target)
        );
        bus.clear();
    }
}
