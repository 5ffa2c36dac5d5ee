use super::super::catalog::DiagnosticCatalog;
use super::super::domain::{CapacityId, DiagnosticError, InterventionStatus, Lever};
use serde::Serialize;

/// Adoption breakdown for one lever of one capacity.
#[derive(Debug, Clone, Serialize)]
pub struct LeverScore {
    pub lever: Lever,
    pub implemented: usize,
    pub total: usize,
    pub percentage: f32,
}

/// One weak capacity with its lever breakdown and the lever whose
/// adoption is lowest.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCapacity {
    pub capacity: CapacityId,
    pub rating: u8,
    /// One entry per lever, in [`Lever::ordered`] order.
    pub levers: Vec<LeverScore>,
    pub missing_lever: Lever,
}

impl ScoredCapacity {
    pub fn lever(&self, lever: Lever) -> Option<&LeverScore> {
        self.levers.iter().find(|score| score.lever == lever)
    }
}

pub(crate) fn score_capacity(
    catalog: &DiagnosticCatalog,
    capacity: CapacityId,
    rating: u8,
    status: &InterventionStatus,
) -> Result<ScoredCapacity, DiagnosticError> {
    if catalog.interventions_for(capacity).is_empty() {
        return Err(DiagnosticError::MissingInterventionCatalog(capacity));
    }

    let levers: Vec<LeverScore> = Lever::ordered()
        .into_iter()
        .map(|lever| {
            let templates = catalog.interventions_for_lever(capacity, lever);
            let total = templates.len();
            let implemented = templates
                .iter()
                .filter(|template| status.is_adopted(template.id))
                .count();
            let percentage = if total == 0 {
                0.0
            } else {
                implemented as f32 / total as f32
            };
            LeverScore {
                lever,
                implemented,
                total,
                percentage,
            }
        })
        .collect();

    // Arg-min over lever order; strict comparison keeps the first lever
    // on ties, matching the fixed priority order.
    let mut missing_lever = Lever::Training;
    let mut lowest = f32::INFINITY;
    for score in &levers {
        if score.percentage < lowest {
            lowest = score.percentage;
            missing_lever = score.lever;
        }
    }

    Ok(ScoredCapacity {
        capacity,
        rating,
        levers,
        missing_lever,
    })
}
