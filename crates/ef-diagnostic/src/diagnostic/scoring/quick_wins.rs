use super::super::catalog::QuickWinTheme;
use super::super::domain::{CapacityId, InterventionStatus};
use serde::Serialize;

/// Maximum number of themes surfaced in the action plan.
pub(crate) const MAX_QUICK_WINS: usize = 4;

/// A theme selected for the action plan: which weak capacities it
/// helps and how many of its interventions are still unadopted.
#[derive(Debug, Clone, Serialize)]
pub struct QuickWin {
    pub title: &'static str,
    pub description: &'static str,
    pub helped: Vec<CapacityId>,
    pub missed: usize,
}

/// Ranks themes by (weak capacities helped, unadopted interventions
/// addressed), descending. The sort is stable, so themes with identical
/// tuples keep catalog declaration order.
pub(crate) fn analyze(
    themes: &[QuickWinTheme],
    weak_capacities: &[CapacityId],
    status: &InterventionStatus,
) -> Vec<QuickWin> {
    let mut wins: Vec<QuickWin> = themes
        .iter()
        .filter_map(|theme| {
            let mut helped = Vec::new();
            let mut missed = 0;
            for (capacity, intervention_ids) in &theme.map {
                if !weak_capacities.contains(capacity) {
                    continue;
                }
                let unadopted = intervention_ids
                    .iter()
                    .filter(|id| !status.is_adopted(id))
                    .count();
                if unadopted > 0 {
                    helped.push(*capacity);
                    missed += unadopted;
                }
            }

            if helped.is_empty() {
                None
            } else {
                Some(QuickWin {
                    title: theme.title,
                    description: theme.description,
                    helped,
                    missed,
                })
            }
        })
        .collect();

    wins.sort_by(|a, b| {
        b.helped
            .len()
            .cmp(&a.helped.len())
            .then(b.missed.cmp(&a.missed))
    });
    wins.truncate(MAX_QUICK_WINS);
    wins
}
