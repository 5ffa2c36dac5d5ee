use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The 11 executive function capacities measured by the diagnostic.
/// Declaration order is catalog order and drives every stable tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityId {
    ResponseInhibition,
    EmotionalRegulation,
    SustainedAttention,
    TaskInitiation,
    GoalPersistence,
    Planning,
    Organization,
    TimeAwareness,
    WorkingMemory,
    CognitiveFlexibility,
    Metacognition,
}

impl CapacityId {
    pub const COUNT: usize = 11;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::ResponseInhibition,
            Self::EmotionalRegulation,
            Self::SustainedAttention,
            Self::TaskInitiation,
            Self::GoalPersistence,
            Self::Planning,
            Self::Organization,
            Self::TimeAwareness,
            Self::WorkingMemory,
            Self::CognitiveFlexibility,
            Self::Metacognition,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ResponseInhibition => "Response Inhibition",
            Self::EmotionalRegulation => "Emotional Regulation",
            Self::SustainedAttention => "Sustained Attention",
            Self::TaskInitiation => "Task Initiation",
            Self::GoalPersistence => "Goal-Directed Persistence",
            Self::Planning => "Planning & Prioritization",
            Self::Organization => "Organization",
            Self::TimeAwareness => "Time Awareness",
            Self::WorkingMemory => "Working Memory",
            Self::CognitiveFlexibility => "Cognitive Flexibility",
            Self::Metacognition => "Metacognition",
        }
    }
}

/// Thematic grouping of capacities. Display-only: clustering never
/// affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    InhibitionAndRegulation,
    InitiationAndPersistence,
    PlanningAndOrganization,
    FlexibilityAndMetacognition,
}

impl Cluster {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::InhibitionAndRegulation,
            Self::InitiationAndPersistence,
            Self::PlanningAndOrganization,
            Self::FlexibilityAndMetacognition,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InhibitionAndRegulation => "Inhibition & Regulation",
            Self::InitiationAndPersistence => "Initiation & Persistence",
            Self::PlanningAndOrganization => "Planning & Organization",
            Self::FlexibilityAndMetacognition => "Flexibility & Metacognition",
        }
    }
}

/// The three support levers an intervention can pull. Declaration order
/// is the fixed priority order used to break missing-lever ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Training,
    Environment,
    Accountability,
}

impl Lever {
    pub const fn ordered() -> [Self; 3] {
        [Self::Training, Self::Environment, Self::Accountability]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Training => "Training",
            Self::Environment => "Environment",
            Self::Accountability => "Accountability",
        }
    }
}

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// Per-capacity self-ratings on the 1-10 scale. A map is complete once
/// every capacity in the catalog has an entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ratings(BTreeMap<CapacityId, u8>);

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, capacity: CapacityId, value: u8) -> Result<(), DiagnosticError> {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(DiagnosticError::RatingOutOfRange { capacity, value });
        }
        self.0.insert(capacity, value);
        Ok(())
    }

    pub fn get(&self, capacity: CapacityId) -> Option<u8> {
        self.0.get(&capacity).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == CapacityId::COUNT
    }

    /// Mean across the full catalog; unrated capacities count as zero so
    /// the average never flatters an incomplete submission.
    pub fn average(&self) -> f32 {
        let sum: u32 = CapacityId::ordered()
            .iter()
            .map(|id| u32::from(self.get(*id).unwrap_or(0)))
            .sum();
        sum as f32 / CapacityId::COUNT as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = (CapacityId, u8)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }
}

/// Sparse adoption checklist over intervention ids. Unset entries are
/// treated as not adopted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterventionStatus(BTreeSet<String>);

impl InterventionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adopt(&mut self, intervention_id: impl Into<String>) {
        self.0.insert(intervention_id.into());
    }

    pub fn set(&mut self, intervention_id: &str, adopted: bool) {
        if adopted {
            self.0.insert(intervention_id.to_owned());
        } else {
            self.0.remove(intervention_id);
        }
    }

    pub fn is_adopted(&self, intervention_id: &str) -> bool {
        self.0.contains(intervention_id)
    }

    pub fn adopted_count(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    #[error("rating {value} for {capacity:?} is outside the 1-10 scale")]
    RatingOutOfRange { capacity: CapacityId, value: u8 },
    #[error("only {rated} of {required} capacities rated; diagnostic requires a complete rating map")]
    IncompleteRatings { rated: usize, required: usize },
    #[error("no interventions catalogued for {0:?}; static catalog data is inconsistent")]
    MissingInterventionCatalog(CapacityId),
}
