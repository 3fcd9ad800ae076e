//! Panel zones: the named slots a component can be placed into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named slot in the panel layout.
///
/// The zone set is fixed across all levels; which zones a level actually
/// uses comes from its rule set. Zones carry stable string keys so the
/// presentation layer and saved data can refer to them without depending
/// on enum ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    /// Main supply slot at the top of the panel
    Main,
    /// Distribution circuit 1
    Circuit1,
    /// Distribution circuit 2
    Circuit2,
    /// Distribution circuit 3
    Circuit3,
    /// Distribution circuit 4
    Circuit4,
    /// Load output 1
    Output1,
    /// Load output 2
    Output2,
    /// Load output 3
    Output3,
    /// Load output 4
    Output4,
}

impl ZoneId {
    /// All zones, in panel display order (top to bottom).
    pub const ALL: [Self; 9] = [
        Self::Main,
        Self::Circuit1,
        Self::Circuit2,
        Self::Circuit3,
        Self::Circuit4,
        Self::Output1,
        Self::Output2,
        Self::Output3,
        Self::Output4,
    ];

    /// Stable string key for this zone.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Circuit1 => "circuit1",
            Self::Circuit2 => "circuit2",
            Self::Circuit3 => "circuit3",
            Self::Circuit4 => "circuit4",
            Self::Output1 => "output1",
            Self::Output2 => "output2",
            Self::Output3 => "output3",
            Self::Output4 => "output4",
        }
    }

    /// Human-readable zone name shown as the slot placeholder.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Main => "Main Breaker",
            Self::Circuit1 => "Circuit 1",
            Self::Circuit2 => "Circuit 2",
            Self::Circuit3 => "Circuit 3",
            Self::Circuit4 => "Circuit 4",
            Self::Output1 => "Output 1",
            Self::Output2 => "Output 2",
            Self::Output3 => "Output 3",
            Self::Output4 => "Output 4",
        }
    }

    /// Parses a stable string key back into a zone.
    ///
    /// Returns `None` for unrecognized keys; callers surface that as an
    /// `UnknownZone` condition rather than an error.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.key() == key)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip_is_total() {
        for zone in ZoneId::ALL {
            assert_eq!(ZoneId::parse_key(zone.key()), Some(zone));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(ZoneId::parse_key("subpanel"), None);
    }
}
