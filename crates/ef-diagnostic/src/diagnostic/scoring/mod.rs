mod policy;
mod quick_wins;
mod rules;

pub use policy::{recommend, Recommendation};
pub use quick_wins::QuickWin;
pub use rules::{LeverScore, ScoredCapacity};

use super::catalog::{CapacityProfile, DiagnosticCatalog};
use super::domain::{CapacityId, DiagnosticError, InterventionStatus, Ratings};
use serde::Serialize;

/// How many capacities the detailed report drills into.
pub const WEAKEST_COUNT: usize = 3;

/// Stateless scoring engine over a read-only catalog. All computation
/// is pure: identical inputs always produce identical outcomes.
pub struct DiagnosticEngine<'a> {
    catalog: &'a DiagnosticCatalog,
}

impl<'a> DiagnosticEngine<'a> {
    pub fn new(catalog: &'a DiagnosticCatalog) -> Self {
        Self { catalog }
    }

    /// The lowest-rated capacities, ties broken by catalog order.
    /// Best-effort with an incomplete rating map: returns as many as
    /// have been rated, up to [`WEAKEST_COUNT`].
    pub fn select_weakest(&self, ratings: &Ratings) -> Vec<&'a CapacityProfile> {
        let mut rated: Vec<(&CapacityProfile, u8)> = self
            .catalog
            .capacities()
            .iter()
            .filter_map(|profile| ratings.get(profile.id).map(|rating| (profile, rating)))
            .collect();
        rated.sort_by_key(|(_, rating)| *rating);
        rated
            .into_iter()
            .take(WEAKEST_COUNT)
            .map(|(profile, _)| profile)
            .collect()
    }

    /// Per-lever adoption breakdown for one capacity.
    pub fn score_capacity(
        &self,
        capacity: CapacityId,
        rating: u8,
        status: &InterventionStatus,
    ) -> Result<ScoredCapacity, DiagnosticError> {
        rules::score_capacity(self.catalog, capacity, rating, status)
    }

    /// Ranked cross-cutting quick wins for the given weak capacities.
    pub fn find_quick_wins(
        &self,
        weak_capacities: &[CapacityId],
        status: &InterventionStatus,
    ) -> Vec<QuickWin> {
        quick_wins::analyze(self.catalog.themes(), weak_capacities, status)
    }

    /// Full diagnostic: weakest capacities, tier recommendation, and
    /// quick-win plan. Requires a complete rating map; partial input is
    /// rejected rather than silently scored.
    pub fn compute_results(
        &self,
        ratings: &Ratings,
        status: &InterventionStatus,
    ) -> Result<DiagnosticOutcome, DiagnosticError> {
        if !ratings.is_complete() {
            return Err(DiagnosticError::IncompleteRatings {
                rated: ratings.len(),
                required: CapacityId::COUNT,
            });
        }

        let weakest = self
            .select_weakest(ratings)
            .into_iter()
            .map(|profile| {
                let rating = ratings.get(profile.id).unwrap_or(0);
                self.score_capacity(profile.id, rating, status)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let recommendation = recommend(&weakest);
        let weak_ids: Vec<CapacityId> = weakest.iter().map(|scored| scored.capacity).collect();
        let quick_wins = self.find_quick_wins(&weak_ids, status);

        Ok(DiagnosticOutcome {
            weakest,
            recommendation,
            quick_wins,
        })
    }
}

/// Complete scoring result handed to the report renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticOutcome {
    pub weakest: Vec<ScoredCapacity>,
    pub recommendation: Recommendation,
    pub quick_wins: Vec<QuickWin>,
}
