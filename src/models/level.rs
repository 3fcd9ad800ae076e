//! Level definitions and per-level wiring requirements.
//!
//! Each level has a hand-authored rule set mapping zones to the component
//! kinds they accept. The tables are literal, not generated: later levels
//! add zones and may broaden what a zone accepts, but they are not strict
//! supersets of earlier levels (level 3's main slot wants a residual
//! device where levels 1 and 2 want a breaker).

use std::collections::HashMap;

use crate::models::{ComponentKind, ZoneId};

/// A playable difficulty level, 1-based.
pub type Level = u8;

/// Per-level wiring requirements: zone → kinds that zone accepts.
pub type Requirements = HashMap<ZoneId, Vec<ComponentKind>>;

/// Returns the wiring requirements for the given level.
///
/// Levels outside `1..=MAX_LEVEL` get an empty map rather than an error,
/// which makes out-of-range input vacuously complete instead of a crash.
#[must_use]
pub fn requirements_for(level: Level) -> Requirements {
    use ComponentKind::{Breaker, Lamp, Outlet, ResidualDevice};
    use ZoneId::{
        Circuit1, Circuit2, Circuit3, Circuit4, Main, Output1, Output2, Output3, Output4,
    };

    match level {
        1 => HashMap::from([
            (Main, vec![Breaker]),
            (Circuit1, vec![ResidualDevice]),
            (Circuit2, vec![Breaker]),
            (Output1, vec![Outlet]),
            (Output2, vec![Lamp]),
        ]),
        2 => HashMap::from([
            (Main, vec![Breaker]),
            (Circuit1, vec![ResidualDevice]),
            (Circuit2, vec![ResidualDevice]),
            (Circuit3, vec![Breaker]),
            (Output1, vec![Outlet]),
            (Output2, vec![Lamp]),
            (Output3, vec![Outlet, Lamp]),
        ]),
        3 => HashMap::from([
            (Main, vec![ResidualDevice]),
            (Circuit1, vec![ResidualDevice]),
            (Circuit2, vec![Breaker]),
            (Circuit3, vec![Breaker]),
            (Circuit4, vec![Breaker]),
            (Output1, vec![Outlet]),
            (Output2, vec![Outlet]),
            (Output3, vec![Lamp]),
            (Output4, vec![Lamp]),
        ]),
        _ => HashMap::new(),
    }
}

/// Zones used by the given level, in panel display order.
#[must_use]
pub fn zones_for(level: Level) -> Vec<ZoneId> {
    let requirements = requirements_for(level);
    ZoneId::ALL
        .into_iter()
        .filter(|zone| requirements.contains_key(zone))
        .collect()
}
