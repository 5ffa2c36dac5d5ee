use super::rules::ScoredCapacity;
use super::super::domain::Lever;
use serde::{Deserialize, Serialize};

/// Service tier suggested by the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    FullSystem,
    CoachOnly,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullSystem => "Full Execution System",
            Self::CoachOnly => "Coached Execution",
        }
    }
}

/// Hard-coded decision table over the weakest capacities' missing
/// levers. The lighter tier is suggested only for environment-dominated
/// profiles with no accountability gap; there is deliberately no
/// training-dominated branch, so those profiles fall through to the
/// full system.
pub fn recommend(results: &[ScoredCapacity]) -> Recommendation {
    let accountability_gaps = results
        .iter()
        .filter(|result| result.missing_lever == Lever::Accountability)
        .count();
    let environment_gaps = results
        .iter()
        .filter(|result| result.missing_lever == Lever::Environment)
        .count();

    if environment_gaps >= 2 && accountability_gaps == 0 {
        Recommendation::CoachOnly
    } else {
        Recommendation::FullSystem
    }
}
