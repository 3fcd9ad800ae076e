//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the simulator's scoring rules.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Panelwise";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "panelwise";

/// Highest level defined in the rule catalog.
pub const MAX_LEVEL: u8 = 3;

/// Points awarded for successfully placing a component.
pub const PLACEMENT_BONUS: u32 = 10;

/// Points deducted when a component is removed from a zone.
pub const REMOVAL_PENALTY: u32 = 5;

/// Points deducted when the panel is reset.
pub const RESET_PENALTY: u32 = 50;

/// Points awarded per correct connection when the panel is checked.
pub const CONNECTION_POINTS: u32 = 20;

/// Flat bonus awarded on completing a level.
pub const LEVEL_COMPLETION_BONUS: u32 = 100;

/// Percentage at or above which a validation counts as a pass.
pub const PASS_THRESHOLD: u8 = 80;

/// Percentage at or above which a validation counts as partial credit.
pub const PARTIAL_THRESHOLD: u8 = 50;

/// Delay before the automatic check fires once every required zone is filled.
pub const AUTO_CHECK_DELAY: Duration = Duration::from_secs(1);

/// Delay between a passing check and the level-completion bonus, so the
/// result popup is visible before the level advances.
pub const LEVEL_COMPLETE_DELAY: Duration = Duration::from_secs(2);

/// Delay before the quiz advances to the next question after an answer.
pub const QUIZ_ADVANCE_DELAY: Duration = Duration::from_secs(2);
