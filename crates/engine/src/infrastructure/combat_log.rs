//! Combat log sinks.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crewroll_domain::{CombatAction, CombatEvent};

use crate::infrastructure::ports::CombatLogSink;

/// One reported unit: a whole action or a standalone event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "camelCase")]
pub enum LogEntry {
    Action(CombatAction),
    Event(CombatEvent),
}

impl LogEntry {
    pub fn as_action(&self) -> Option<&CombatAction> {
        match self {
            Self::Action(action) => Some(action),
            Self::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&CombatEvent> {
        match self {
            Self::Event(event) => Some(event),
            Self::Action(_) => None,
        }
    }
}

/// Ordered in-memory history of everything delivered.
#[derive(Default)]
pub struct InMemoryCombatLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl InMemoryCombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the history in delivery order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take the history, leaving the log empty.
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.lock())
    }
}

impl CombatLogSink for InMemoryCombatLog {
    fn record_action(&self, action: CombatAction) {
        self.lock().push(LogEntry::Action(action));
    }

    fn record_event(&self, event: CombatEvent) {
        self.lock().push(LogEntry::Event(event));
    }
}

/// Writes each delivered unit to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCombatLog;

impl CombatLogSink for TracingCombatLog {
    fn record_action(&self, action: CombatAction) {
        tracing::info!(
            action_id = %action.id(),
            actor = %action.actor(),
            cause = %action.cause(),
            events = action.len(),
            "Combat action completed"
        );
        for event in action.events() {
            log_event(event);
        }
    }

    fn record_event(&self, event: CombatEvent) {
        log_event(&event);
    }
}

fn log_event(event: &CombatEvent) {
    match event.roll() {
        Some(outcome) => tracing::info!(
            kind = ?event.kind(),
            source = %event.source(),
            roll = %outcome,
            "Combat event"
        ),
        None => tracing::info!(
            kind = ?event.kind(),
            source = %event.source(),
            "Combat event"
        ),
    }
}
