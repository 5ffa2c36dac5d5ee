use ef_diagnostic::diagnostic::audience::Audience;
use ef_diagnostic::diagnostic::domain::{
    CapacityId, DiagnosticError, InterventionStatus, Ratings,
};
use ef_diagnostic::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk assessment format: who it's for, the 1-10 rating per
/// capacity, and the intervention ids already in place.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DiagnosticInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) audience: Audience,
    pub(crate) ratings: Ratings,
    #[serde(default)]
    pub(crate) adopted: InterventionStatus,
}

impl DiagnosticInput {
    pub(crate) fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Ratings deserialize as a plain map, so range checking happens
    /// here rather than in serde.
    pub(crate) fn validated_ratings(&self) -> Result<Ratings, DiagnosticError> {
        let mut ratings = Ratings::new();
        for (capacity, value) in self.ratings.iter() {
            ratings.set(capacity, value)?;
        }
        Ok(ratings)
    }

    pub(crate) fn sample() -> Self {
        let mut ratings = Ratings::new();
        let scores = [
            (CapacityId::ResponseInhibition, 4),
            (CapacityId::EmotionalRegulation, 6),
            (CapacityId::SustainedAttention, 3),
            (CapacityId::TaskInitiation, 5),
            (CapacityId::GoalPersistence, 6),
            (CapacityId::Planning, 4),
            (CapacityId::Organization, 7),
            (CapacityId::TimeAwareness, 5),
            (CapacityId::WorkingMemory, 6),
            (CapacityId::CognitiveFlexibility, 8),
            (CapacityId::Metacognition, 5),
        ];
        for (capacity, value) in scores {
            ratings
                .set(capacity, value)
                .expect("sample rating on the 1-10 scale");
        }

        let mut adopted = InterventionStatus::new();
        adopted.adopt("sa_pomodoro");
        adopted.adopt("pl_calendar");

        Self {
            name: Some("Avery Parker".to_owned()),
            audience: Audience::Student,
            ratings,
            adopted,
        }
    }
}
