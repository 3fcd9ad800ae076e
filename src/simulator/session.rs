//! The simulator session: score, level, timer, and orchestration.

use std::time::{Duration, Instant};

use crate::constants::{
    AUTO_CHECK_DELAY, CONNECTION_POINTS, LEVEL_COMPLETE_DELAY, LEVEL_COMPLETION_BONUS, MAX_LEVEL,
    PLACEMENT_BONUS, REMOVAL_PENALTY, RESET_PENALTY,
};
use crate::models::{requirements_for, ComponentInfo, ComponentKind, Level, Requirements, ZoneId};
use crate::simulator::board::PlacementBoard;
use crate::simulator::outcome::{ActionError, PlacedComponent};
use crate::simulator::scheduler::{DeferredAction, Scheduler, TaskToken};
use crate::simulator::validator::{self, ValidationReport};

/// One play-through of the simulator.
///
/// Owns the placement board, the active level and its rule set, the
/// score, and the deferred-task queue. The session lives for the page
/// lifetime equivalent (from app start to quit) and is never persisted.
///
/// Every user-facing operation returns a structured outcome; the worst
/// case is a rejected action carrying an [`ActionError`] for display.
#[derive(Debug)]
pub struct Session {
    board: PlacementBoard,
    current_level: Level,
    score: u32,
    correct_connections: usize,
    started: Instant,
    scheduler: Scheduler,
    pending_auto_check: Option<TaskToken>,
}

impl Session {
    /// Starts a fresh session at level 1 with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: PlacementBoard::new(),
            current_level: 1,
            score: 0,
            correct_connections: 0,
            started: Instant::now(),
            scheduler: Scheduler::new(),
            pending_auto_check: None,
        }
    }

    /// Arms a component for placement, returning its display descriptor
    /// so the UI can announce the selection.
    pub fn select_component(&mut self, kind: ComponentKind) -> ComponentInfo {
        self.board.select(kind);
        kind.describe()
    }

    /// Places the armed component into `zone`.
    ///
    /// On success the placement bonus is awarded and, once every required
    /// zone is occupied, an automatic check is scheduled. Rejections pass
    /// through from the board untouched.
    pub fn place_at(&mut self, zone: ZoneId) -> Result<PlacedComponent, ActionError> {
        let rules = self.requirements();
        let kind = self.board.place(zone, &rules)?;
        self.add_score(PLACEMENT_BONUS);

        // Board full for this level: queue the automatic check. Only one
        // auto-check may be pending at a time.
        if self.board.occupied_count() >= rules.len()
            && !rules.is_empty()
            && self.pending_auto_check.is_none()
        {
            let token = self
                .scheduler
                .schedule(DeferredAction::AutoCheck, AUTO_CHECK_DELAY);
            self.pending_auto_check = Some(token);
        }

        Ok(PlacedComponent { zone, kind })
    }

    /// String-keyed variant of [`Self::select_component`], for callers
    /// that address the catalog by key (saved data, scripted drivers).
    /// Unknown keys come back as `UnknownComponent`, never a panic.
    pub fn select_component_key(&mut self, key: &str) -> Result<ComponentInfo, ActionError> {
        let kind = ComponentKind::parse_key(key)
            .ok_or_else(|| ActionError::UnknownComponent(key.to_string()))?;
        Ok(self.select_component(kind))
    }

    /// String-keyed variant of [`Self::place_at`]; unknown zone keys come
    /// back as `UnknownZone`.
    pub fn place_at_key(&mut self, key: &str) -> Result<PlacedComponent, ActionError> {
        let zone =
            ZoneId::parse_key(key).ok_or_else(|| ActionError::UnknownZone(key.to_string()))?;
        self.place_at(zone)
    }

    /// String-keyed variant of [`Self::remove_at`]; unknown zone keys come
    /// back as `UnknownZone`.
    pub fn remove_at_key(&mut self, key: &str) -> Result<Option<ComponentKind>, ActionError> {
        let zone =
            ZoneId::parse_key(key).ok_or_else(|| ActionError::UnknownZone(key.to_string()))?;
        Ok(self.remove_at(zone))
    }

    /// Removes the component from `zone`, deducting the removal penalty.
    ///
    /// A no-op returning `None` when the zone is already empty.
    pub fn remove_at(&mut self, zone: ZoneId) -> Option<ComponentKind> {
        let removed = self.board.remove(zone)?;
        self.deduct_score(REMOVAL_PENALTY);
        if let Some(token) = self.pending_auto_check.take() {
            // The board is no longer full; the queued check is stale.
            self.scheduler.cancel(token);
        }
        Some(removed)
    }

    /// Clears the board and the pending selection, deducting the reset
    /// penalty (score floor is 0). Cancels all deferred tasks.
    pub fn reset_panel(&mut self) {
        self.board.clear();
        self.deduct_score(RESET_PENALTY);
        self.correct_connections = 0;
        self.scheduler.cancel_all();
        self.pending_auto_check = None;
    }

    /// Switches to level `n`.
    ///
    /// Progression is strictly sequential: the jump is allowed only when
    /// `n` is at most one past the current level (and within the defined
    /// level range). A rejected jump leaves the current level unchanged.
    /// On success the panel is reset, with the usual reset penalty.
    pub fn select_level(&mut self, n: Level) -> Result<Level, ActionError> {
        if n < 1 || n > MAX_LEVEL || n > self.current_level + 1 {
            return Err(ActionError::LevelLocked {
                requested: n,
                current: self.current_level,
            });
        }
        self.current_level = n;
        self.reset_panel();
        Ok(n)
    }

    /// Whether the level button for `n` should render as reachable.
    #[must_use]
    pub fn is_level_unlocked(&self, n: Level) -> bool {
        (1..=MAX_LEVEL).contains(&n) && n <= self.current_level + 1
    }

    /// Validates the whole board against the active rule set.
    ///
    /// Awards points per correct connection. A passing result schedules
    /// the level completion after a delay, so the results popup renders
    /// before the level advances.
    pub fn check_connections(&mut self) -> ValidationReport {
        let report = validator::evaluate(self.board.snapshot(), &self.requirements());
        self.correct_connections = report.correct_count;
        self.add_score(CONNECTION_POINTS * report.correct_count as u32);
        if let Some(token) = self.pending_auto_check.take() {
            // A manual check supersedes the queued automatic one.
            self.scheduler.cancel(token);
        }

        if report.passed() {
            self.scheduler
                .schedule(DeferredAction::CompleteLevel, LEVEL_COMPLETE_DELAY);
        }
        report
    }

    /// Awards the completion bonus. The next level becomes reachable
    /// through the sequential-progression rule; at the top level the
    /// score and timer simply keep running.
    pub fn complete_level(&mut self) {
        self.add_score(LEVEL_COMPLETION_BONUS);
    }

    /// Drains deferred actions that have come due. The event loop calls
    /// this every tick and executes what it gets back.
    pub fn tick(&mut self, now: Instant) -> Vec<DeferredAction> {
        let due = self.scheduler.drain_due(now);
        if due.contains(&DeferredAction::AutoCheck) {
            self.pending_auto_check = None;
        }
        due
    }

    /// Rule set for the active level.
    #[must_use]
    pub fn requirements(&self) -> Requirements {
        requirements_for(self.current_level)
    }

    /// Read access to the board for rendering and validation displays.
    #[must_use]
    pub fn board(&self) -> &PlacementBoard {
        &self.board
    }

    /// Current cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The active level.
    #[must_use]
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    /// Correct connections counted by the most recent check.
    #[must_use]
    pub fn correct_connections(&self) -> usize {
        self.correct_connections
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    fn deduct_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_level_one(session: &mut Session) {
        use ComponentKind::{Breaker, Lamp, Outlet, ResidualDevice};
        for (zone, kind) in [
            (ZoneId::Main, Breaker),
            (ZoneId::Circuit1, ResidualDevice),
            (ZoneId::Circuit2, Breaker),
            (ZoneId::Output1, Outlet),
            (ZoneId::Output2, Lamp),
        ] {
            session.select_component(kind);
            session.place_at(zone).unwrap();
        }
    }

    #[test]
    fn placement_awards_bonus_and_removal_nets_the_difference() {
        let mut session = Session::new();
        session.select_component(ComponentKind::Breaker);
        session.place_at(ZoneId::Main).unwrap();
        assert_eq!(session.score(), PLACEMENT_BONUS);

        session.remove_at(ZoneId::Main);
        assert_eq!(session.score(), PLACEMENT_BONUS - REMOVAL_PENALTY);
        assert_eq!(session.board().occupant(ZoneId::Main), None);
    }

    #[test]
    fn score_never_goes_negative() {
        let mut session = Session::new();
        session.reset_panel();
        session.reset_panel();
        assert_eq!(session.score(), 0);

        session.select_component(ComponentKind::Breaker);
        session.place_at(ZoneId::Main).unwrap();
        session.remove_at(ZoneId::Main);
        session.reset_panel();
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn double_reset_is_idempotent_on_the_board() {
        let mut session = Session::new();
        session.select_component(ComponentKind::Breaker);
        session.place_at(ZoneId::Main).unwrap();

        session.reset_panel();
        let after_first = session.score();
        session.reset_panel();

        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.board().pending(), None);
        assert_eq!(session.score(), after_first.saturating_sub(RESET_PENALTY));
    }

    #[test]
    fn level_jumps_beyond_next_are_rejected() {
        let mut session = Session::new();
        let err = session.select_level(3).unwrap_err();
        assert_eq!(
            err,
            ActionError::LevelLocked {
                requested: 3,
                current: 1,
            }
        );
        assert_eq!(session.current_level(), 1);

        // One step forward is always allowed
        assert_eq!(session.select_level(2), Ok(2));
        assert_eq!(session.select_level(3), Ok(3));
    }

    #[test]
    fn out_of_range_levels_are_locked() {
        let mut session = Session::new();
        assert!(session.select_level(0).is_err());
        session.select_level(2).unwrap();
        session.select_level(3).unwrap();
        assert!(session.select_level(MAX_LEVEL + 1).is_err());
        assert_eq!(session.current_level(), MAX_LEVEL);
    }

    #[test]
    fn filling_the_board_schedules_exactly_one_auto_check() {
        let mut session = Session::new();
        fill_level_one(&mut session);

        let later = Instant::now() + AUTO_CHECK_DELAY + Duration::from_millis(10);
        assert_eq!(session.tick(later), vec![DeferredAction::AutoCheck]);
        assert!(session.tick(later).is_empty());
    }

    #[test]
    fn manual_check_cancels_the_queued_auto_check() {
        let mut session = Session::new();
        fill_level_one(&mut session);
        let report = session.check_connections();
        let scored = session.score();

        // The queued automatic check must not fire and score again.
        let later = Instant::now() + AUTO_CHECK_DELAY + Duration::from_millis(10);
        let due = session.tick(later);
        assert!(!due.contains(&DeferredAction::AutoCheck));
        assert_eq!(session.score(), scored);
        assert!(report.passed());
    }

    #[test]
    fn removal_after_manual_check_leaves_nothing_queued() {
        let mut session = Session::new();
        fill_level_one(&mut session);
        session.check_connections();
        session.remove_at(ZoneId::Output2);

        let later = Instant::now() + AUTO_CHECK_DELAY + Duration::from_millis(10);
        assert!(!session.tick(later).contains(&DeferredAction::AutoCheck));
    }

    #[test]
    fn score_additions_saturate_instead_of_overflowing() {
        let mut session = Session::new();
        session.add_score(u32::MAX);
        session.add_score(PLACEMENT_BONUS);
        assert_eq!(session.score(), u32::MAX);
    }

    #[test]
    fn removal_cancels_the_queued_auto_check() {
        let mut session = Session::new();
        fill_level_one(&mut session);
        session.remove_at(ZoneId::Output2);

        let later = Instant::now() + AUTO_CHECK_DELAY + Duration::from_millis(10);
        assert!(session.tick(later).is_empty());
    }

    #[test]
    fn passing_check_scores_and_schedules_completion() {
        let mut session = Session::new();
        fill_level_one(&mut session);
        let score_before = session.score();

        let report = session.check_connections();
        assert!(report.passed());
        assert_eq!(session.correct_connections(), 5);
        assert_eq!(session.score(), score_before + 5 * CONNECTION_POINTS);

        let later = Instant::now() + LEVEL_COMPLETE_DELAY + Duration::from_millis(10);
        let due = session.tick(later);
        assert!(due.contains(&DeferredAction::CompleteLevel));

        let before_bonus = session.score();
        session.complete_level();
        assert_eq!(session.score(), before_bonus + LEVEL_COMPLETION_BONUS);
        assert!(session.is_level_unlocked(2));
    }

    #[test]
    fn string_keys_resolve_or_report_the_unknown_key() {
        let mut session = Session::new();
        let info = session.select_component_key("breaker").unwrap();
        assert_eq!(info.display_name, "Circuit Breaker");
        assert!(session.place_at_key("main").is_ok());
        assert_eq!(
            session.remove_at_key("main"),
            Ok(Some(ComponentKind::Breaker))
        );

        assert_eq!(
            session.select_component_key("fuse"),
            Err(ActionError::UnknownComponent("fuse".to_string()))
        );
        assert_eq!(
            session.place_at_key("attic"),
            Err(ActionError::UnknownZone("attic".to_string()))
        );
    }

    #[test]
    fn level_switch_clears_queued_tasks() {
        let mut session = Session::new();
        fill_level_one(&mut session);
        session.select_level(2).unwrap();

        let later = Instant::now() + AUTO_CHECK_DELAY + Duration::from_millis(10);
        assert!(session.tick(later).is_empty());
        assert_eq!(session.board().occupied_count(), 0);
    }
}
