//! Validation of the board against a level's wiring requirements.

use std::collections::HashMap;
use std::fmt;

use crate::constants::{PARTIAL_THRESHOLD, PASS_THRESHOLD};
use crate::models::{ComponentKind, Requirements, ZoneId};

/// A single problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required zone holds a kind its accepted set does not contain.
    IncorrectComponent(ZoneId),
    /// A required zone holds nothing.
    EmptyZone(ZoneId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectComponent(zone) => write!(f, "{} has an incorrect component", zone),
            Self::EmptyZone(zone) => write!(f, "{} is empty", zone),
        }
    }
}

/// How a validation result reads to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultBand {
    /// Below 50% correct
    Fail,
    /// 50–79% correct
    Partial,
    /// 80% or better; triggers level completion
    Pass,
}

impl ResultBand {
    fn from_percentage(percentage: u8) -> Self {
        if percentage >= PASS_THRESHOLD {
            Self::Pass
        } else if percentage >= PARTIAL_THRESHOLD {
            Self::Partial
        } else {
            Self::Fail
        }
    }

    /// Headline shown on the results popup.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Pass => "Excellent!",
            Self::Partial => "Almost there!",
            Self::Fail => "Needs improvement",
        }
    }
}

/// The scored outcome of checking the board against a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Required zones holding an accepted kind
    pub correct_count: usize,
    /// Total number of required zones
    pub total_required: usize,
    /// `round(100 * correct / total)`; 100 when nothing is required
    pub percentage: u8,
    /// Itemized problems, one per misfilled or empty required zone
    pub errors: Vec<ValidationError>,
    /// User-facing band derived from the percentage
    pub band: ResultBand,
}

impl ValidationReport {
    /// Whether this result completes the level.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.band == ResultBand::Pass
    }
}

/// Compares a board snapshot against a level's requirements.
///
/// Each required zone contributes one unit to `total_required`. A zone
/// counts as correct iff it is occupied by a kind its accepted set
/// contains; otherwise it contributes one itemized error. Placements in
/// zones the rule set does not mention are ignored, matching the panel
/// layout where such zones cannot be targeted at all.
#[must_use]
pub fn evaluate(
    snapshot: &HashMap<ZoneId, ComponentKind>,
    requirements: &Requirements,
) -> ValidationReport {
    let mut correct_count = 0;
    let mut errors = Vec::new();

    // Report errors in panel display order so the popup reads top-down.
    for zone in ZoneId::ALL {
        let Some(accepted) = requirements.get(&zone) else {
            continue;
        };
        match snapshot.get(&zone) {
            Some(kind) if accepted.contains(kind) => correct_count += 1,
            Some(_) => errors.push(ValidationError::IncorrectComponent(zone)),
            None => errors.push(ValidationError::EmptyZone(zone)),
        }
    }

    let total_required = requirements.len();
    // An empty rule set is vacuously satisfied; avoids dividing by zero.
    let percentage = if total_required == 0 {
        100
    } else {
        ((correct_count as f64 / total_required as f64) * 100.0).round() as u8
    };

    ValidationReport {
        correct_count,
        total_required,
        percentage,
        errors,
        band: ResultBand::from_percentage(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requirements_for;
    use ComponentKind::{Breaker, Lamp, Outlet, ResidualDevice};
    use ZoneId::{Circuit1, Circuit2, Main, Output1, Output2};

    #[test]
    fn fully_correct_level_one_board_scores_100() {
        let snapshot = HashMap::from([
            (Main, Breaker),
            (Circuit1, ResidualDevice),
            (Circuit2, Breaker),
            (Output1, Outlet),
            (Output2, Lamp),
        ]);
        let report = evaluate(&snapshot, &requirements_for(1));

        assert_eq!(report.correct_count, 5);
        assert_eq!(report.total_required, 5);
        assert_eq!(report.percentage, 100);
        assert!(report.errors.is_empty());
        assert_eq!(report.band, ResultBand::Pass);
    }

    #[test]
    fn wrong_kind_and_empty_zone_give_partial_credit() {
        // circuit2 left empty, output2 holds an outlet where a lamp belongs
        let snapshot = HashMap::from([
            (Main, Breaker),
            (Circuit1, ResidualDevice),
            (Output1, Outlet),
            (Output2, Outlet),
        ]);
        let report = evaluate(&snapshot, &requirements_for(1));

        assert_eq!(report.correct_count, 3);
        assert_eq!(report.total_required, 5);
        assert_eq!(report.percentage, 60);
        assert_eq!(report.band, ResultBand::Partial);
        assert!(report
            .errors
            .contains(&ValidationError::EmptyZone(Circuit2)));
        assert!(report
            .errors
            .contains(&ValidationError::IncorrectComponent(Output2)));
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn empty_requirements_are_vacuously_satisfied() {
        let report = evaluate(&HashMap::new(), &HashMap::new());
        assert_eq!(report.percentage, 100);
        assert_eq!(report.total_required, 0);
        assert!(report.passed());
    }

    #[test]
    fn empty_board_fails_outright() {
        let report = evaluate(&HashMap::new(), &requirements_for(1));
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.percentage, 0);
        assert_eq!(report.band, ResultBand::Fail);
        assert_eq!(report.errors.len(), 5);
    }

    #[test]
    fn broadened_zone_accepts_either_kind() {
        let requirements = requirements_for(2);
        for kind in [Outlet, Lamp] {
            let snapshot = HashMap::from([(ZoneId::Output3, kind)]);
            let report = evaluate(&snapshot, &requirements);
            assert_eq!(report.correct_count, 1, "output3 should accept {kind}");
        }
    }
}
