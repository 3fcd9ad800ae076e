//! Electrical component kinds and their display catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of electrical element a learner may place on the panel.
///
/// The set is closed: every kind the catalog knows about is a variant
/// here, so display lookups are total functions. External input (key
/// bindings, saved state) arrives as string keys and goes through
/// [`ComponentKind::parse_key`], which makes the unknown-key case
/// explicit instead of silently producing a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Circuit breaker (overcurrent protection)
    Breaker,
    /// Residual-current device (shock protection)
    ResidualDevice,
    /// Phase conductor
    PhaseWire,
    /// Neutral conductor
    NeutralWire,
    /// Earth/ground conductor
    EarthWire,
    /// Wall outlet
    Outlet,
    /// Light fixture
    Lamp,
}

/// Display descriptor for a component kind: what the UI shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Human-readable name (e.g., "Circuit Breaker")
    pub display_name: &'static str,
    /// Single-glyph icon used in the tray and on placed zones
    pub icon: &'static str,
    /// Semantic style tag the theme maps to a color
    pub style: ComponentStyle,
}

/// Semantic color grouping for components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStyle {
    /// Protective devices (breaker, residual device)
    Protection,
    /// Phase wiring (conventionally red)
    WireRed,
    /// Neutral wiring (conventionally blue)
    WireBlue,
    /// Earth wiring (conventionally green)
    WireGreen,
    /// Load-side fixtures (outlet, lamp)
    Fixture,
    /// Fallback for unrecognized catalog keys
    Unknown,
}

/// Descriptor returned for keys the catalog does not recognize.
///
/// The UI must stay renderable even when handed malformed data, so
/// unknown keys map to this instead of failing the whole operation.
pub const UNKNOWN_COMPONENT: ComponentInfo = ComponentInfo {
    display_name: "Unknown component",
    icon: "?",
    style: ComponentStyle::Unknown,
};

impl ComponentKind {
    /// All kinds, in tray display order.
    pub const ALL: [Self; 7] = [
        Self::Breaker,
        Self::ResidualDevice,
        Self::PhaseWire,
        Self::NeutralWire,
        Self::EarthWire,
        Self::Outlet,
        Self::Lamp,
    ];

    /// Returns the display descriptor for this kind.
    #[must_use]
    pub const fn describe(self) -> ComponentInfo {
        match self {
            Self::Breaker => ComponentInfo {
                display_name: "Circuit Breaker",
                icon: "⏻",
                style: ComponentStyle::Protection,
            },
            Self::ResidualDevice => ComponentInfo {
                display_name: "Residual Device",
                icon: "🛡",
                style: ComponentStyle::Protection,
            },
            Self::PhaseWire => ComponentInfo {
                display_name: "Phase Wire",
                icon: "─",
                style: ComponentStyle::WireRed,
            },
            Self::NeutralWire => ComponentInfo {
                display_name: "Neutral Wire",
                icon: "─",
                style: ComponentStyle::WireBlue,
            },
            Self::EarthWire => ComponentInfo {
                display_name: "Earth Wire",
                icon: "─",
                style: ComponentStyle::WireGreen,
            },
            Self::Outlet => ComponentInfo {
                display_name: "Outlet",
                icon: "⎓",
                style: ComponentStyle::Fixture,
            },
            Self::Lamp => ComponentInfo {
                display_name: "Lamp",
                icon: "💡",
                style: ComponentStyle::Fixture,
            },
        }
    }

    /// Stable string key for this kind.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Breaker => "breaker",
            Self::ResidualDevice => "residual-device",
            Self::PhaseWire => "phase-wire",
            Self::NeutralWire => "neutral-wire",
            Self::EarthWire => "earth-wire",
            Self::Outlet => "outlet",
            Self::Lamp => "lamp",
        }
    }

    /// Parses a stable string key back into a kind.
    ///
    /// Returns `None` for unrecognized keys; callers surface that as an
    /// `UnknownComponent` condition rather than an error.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Resolves a string key to a display descriptor, falling back to
    /// [`UNKNOWN_COMPONENT`] for unrecognized keys.
    #[must_use]
    pub fn describe_key(key: &str) -> ComponentInfo {
        Self::parse_key(key).map_or(UNKNOWN_COMPONENT, Self::describe)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe().display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip_is_total() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::parse_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn unknown_key_falls_back_to_placeholder() {
        let info = ComponentKind::describe_key("transformer");
        assert_eq!(info.display_name, "Unknown component");
        assert_eq!(info.style, ComponentStyle::Unknown);
    }

    #[test]
    fn wire_kinds_carry_conventional_colors() {
        assert_eq!(
            ComponentKind::PhaseWire.describe().style,
            ComponentStyle::WireRed
        );
        assert_eq!(
            ComponentKind::NeutralWire.describe().style,
            ComponentStyle::WireBlue
        );
        assert_eq!(
            ComponentKind::EarthWire.describe().style,
            ComponentStyle::WireGreen
        );
    }
}
