//! Structured outcomes for simulator actions.

use std::fmt;

use crate::models::{ComponentKind, ZoneId};

/// A rejected simulator action.
///
/// None of these are fatal: each one corresponds to a user action the
/// session declined to apply, and each carries enough context to render
/// a feedback message. They are deliberately not `anyhow` errors — the
/// session never unwinds over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Placement attempted with no component armed.
    NoSelection,
    /// Placement attempted on a zone that already holds a component.
    ZoneOccupied(ZoneId),
    /// The armed component is not accepted by the target zone.
    IncompatibleComponent {
        /// Zone the placement targeted
        zone: ZoneId,
        /// Kind that was armed at the time
        kind: ComponentKind,
    },
    /// Attempted to jump past the next unlockable level.
    LevelLocked {
        /// Level the user asked for
        requested: u8,
        /// Current level at the time of the request
        current: u8,
    },
    /// A string key did not name a known component kind.
    UnknownComponent(String),
    /// A string key did not name a known zone.
    UnknownZone(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "Select a component first!"),
            Self::ZoneOccupied(zone) => {
                write!(f, "{} already holds a component", zone)
            }
            Self::IncompatibleComponent { zone, kind } => {
                write!(f, "{} cannot be placed on {}", kind, zone)
            }
            Self::LevelLocked { requested, .. } => {
                write!(f, "Level {} is locked. Complete the previous level first!", requested)
            }
            Self::UnknownComponent(key) => write!(f, "Unknown component '{}'", key),
            Self::UnknownZone(key) => write!(f, "Unknown zone '{}'", key),
        }
    }
}

/// Acknowledgment of a successful placement, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedComponent {
    /// Zone the component landed in
    pub zone: ZoneId,
    /// Kind that was placed
    pub kind: ComponentKind,
}
