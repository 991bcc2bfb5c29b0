//! Routing results.

use thiserror::Error;

use crewroll_domain::{Component, ComponentType, CrewMember};

/// Why an attempt cannot happen. The display text is shown to players as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingFailure {
    #[error("No vehicle")]
    NoVehicle,

    #[error("No component available for {0}")]
    NoComponentFor(String),

    #[error("No {0} component on vehicle")]
    MissingComponent(ComponentType),

    #[error("{0} is not operational")]
    NotOperational(String),

    #[error("No seat controls {0}")]
    NoControllingSeat(String),

    #[error("{0} has no assigned character")]
    UnassignedSeat(String),

    #[error("No character available for {0}")]
    NoCharacterFor(String),

    #[error("No character available for save")]
    NoCharacterForSave,
}

/// The component and/or crew member a roll must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutedSubject<'a> {
    pub component: Option<&'a Component>,
    pub character: Option<&'a CrewMember>,
}

/// Outcome of routing: a subject to roll for, or the reason there is none.
///
/// Built once per routing call. Downstream code rolls for exactly the
/// subject in `Ready` and performs no lookup of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Ready(RoutedSubject<'a>),
    Blocked(RoutingFailure),
}

impl<'a> Resolution<'a> {
    pub(crate) fn ready(component: Option<&'a Component>, character: Option<&'a CrewMember>) -> Self {
        Self::Ready(RoutedSubject {
            component,
            character,
        })
    }

    pub(crate) fn blocked(failure: RoutingFailure) -> Self {
        Self::Blocked(failure)
    }

    pub fn can_attempt(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn component(&self) -> Option<&'a Component> {
        match self {
            Self::Ready(subject) => subject.component,
            Self::Blocked(_) => None,
        }
    }

    pub fn character(&self) -> Option<&'a CrewMember> {
        match self {
            Self::Ready(subject) => subject.character,
            Self::Blocked(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&RoutingFailure> {
        match self {
            Self::Ready(_) => None,
            Self::Blocked(failure) => Some(failure),
        }
    }

    pub fn failure_reason(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }

    pub fn subject(&self) -> Option<RoutedSubject<'a>> {
        match self {
            Self::Ready(subject) => Some(*subject),
            Self::Blocked(_) => None,
        }
    }
}
