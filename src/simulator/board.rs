//! The placement board: which zone holds which component.

use std::collections::HashMap;

use crate::models::{ComponentKind, Requirements, ZoneId};
use crate::simulator::outcome::ActionError;

/// Mutable placement state for the panel.
///
/// The board holds at most one component per zone and the at-most-one
/// pending selection. It enforces the placement invariant itself: a
/// component lands in a zone only if that zone is empty and the active
/// rule set accepts the kind, so no sequence of calls can leave the
/// board holding an incompatible placement.
#[derive(Debug, Default)]
pub struct PlacementBoard {
    placements: HashMap<ZoneId, ComponentKind>,
    pending: Option<ComponentKind>,
}

impl PlacementBoard {
    /// Creates an empty board with nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a component kind for the next placement, replacing any
    /// previous selection. No validation happens yet; compatibility is
    /// checked against the target zone at placement time.
    pub fn select(&mut self, kind: ComponentKind) {
        self.pending = Some(kind);
    }

    /// The currently armed component, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ComponentKind> {
        self.pending
    }

    /// Places the armed component into `zone`, checking compatibility
    /// against the given rule set.
    ///
    /// On success the placement is recorded, the pending selection is
    /// cleared, and the placed kind is returned. Rejections leave both
    /// the zone and the pending selection untouched, so the user can
    /// retry on a different zone.
    pub fn place(&mut self, zone: ZoneId, rules: &Requirements) -> Result<ComponentKind, ActionError> {
        let kind = self.pending.ok_or(ActionError::NoSelection)?;

        if self.placements.contains_key(&zone) {
            return Err(ActionError::ZoneOccupied(zone));
        }

        let accepted = rules
            .get(&zone)
            .is_some_and(|kinds| kinds.contains(&kind));
        if !accepted {
            return Err(ActionError::IncompatibleComponent { zone, kind });
        }

        self.placements.insert(zone, kind);
        self.pending = None;
        Ok(kind)
    }

    /// Removes the component from `zone`, returning it.
    ///
    /// Removing from an empty zone is a no-op, not an error.
    pub fn remove(&mut self, zone: ZoneId) -> Option<ComponentKind> {
        self.placements.remove(&zone)
    }

    /// Clears all placements and the pending selection.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.pending = None;
    }

    /// The component occupying `zone`, if any.
    #[must_use]
    pub fn occupant(&self, zone: ZoneId) -> Option<ComponentKind> {
        self.placements.get(&zone).copied()
    }

    /// Current placements, for the validator.
    #[must_use]
    pub fn snapshot(&self) -> &HashMap<ZoneId, ComponentKind> {
        &self.placements
    }

    /// Number of occupied zones.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.placements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requirements_for;

    #[test]
    fn place_without_selection_is_rejected() {
        let mut board = PlacementBoard::new();
        let rules = requirements_for(1);
        assert_eq!(
            board.place(ZoneId::Main, &rules),
            Err(ActionError::NoSelection)
        );
    }

    #[test]
    fn place_on_occupied_zone_is_rejected_and_keeps_selection() {
        let mut board = PlacementBoard::new();
        let rules = requirements_for(1);

        board.select(ComponentKind::Breaker);
        board.place(ZoneId::Main, &rules).unwrap();

        board.select(ComponentKind::Breaker);
        assert_eq!(
            board.place(ZoneId::Main, &rules),
            Err(ActionError::ZoneOccupied(ZoneId::Main))
        );
        // The rejected selection stays armed for a retry elsewhere
        assert_eq!(board.pending(), Some(ComponentKind::Breaker));
        assert_eq!(board.occupant(ZoneId::Main), Some(ComponentKind::Breaker));
    }

    #[test]
    fn incompatible_kind_is_rejected_and_zone_stays_empty() {
        let mut board = PlacementBoard::new();
        let rules = requirements_for(1);

        board.select(ComponentKind::Lamp);
        assert_eq!(
            board.place(ZoneId::Main, &rules),
            Err(ActionError::IncompatibleComponent {
                zone: ZoneId::Main,
                kind: ComponentKind::Lamp,
            })
        );
        assert_eq!(board.occupant(ZoneId::Main), None);
    }

    #[test]
    fn successful_place_clears_selection() {
        let mut board = PlacementBoard::new();
        let rules = requirements_for(1);

        board.select(ComponentKind::Outlet);
        assert_eq!(
            board.place(ZoneId::Output1, &rules),
            Ok(ComponentKind::Outlet)
        );
        assert_eq!(board.pending(), None);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn remove_from_empty_zone_is_noop() {
        let mut board = PlacementBoard::new();
        assert_eq!(board.remove(ZoneId::Circuit1), None);
    }

    #[test]
    fn zone_only_ever_holds_an_accepted_kind() {
        // Exercise every (kind, zone) pair; whatever sticks must be
        // accepted by the rule set consulted at placement time.
        let rules = requirements_for(2);
        for kind in ComponentKind::ALL {
            for zone in ZoneId::ALL {
                let mut board = PlacementBoard::new();
                board.select(kind);
                if board.place(zone, &rules).is_ok() {
                    assert!(rules[&zone].contains(&kind));
                }
            }
        }
    }
}
