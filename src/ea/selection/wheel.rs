//! Cumulative fitness wheel shared by roulette and SUS.

use crate::ea::types::PopulationMember;

/// Running sums of normalized fitness.
///
/// Normalized fitness is `fitness - min(2 * worst, 0)`. When the worst
/// fitness is negative every weight is shifted up so the worst member keeps
/// a strictly positive share (`-worst`); otherwise raw fitness is used.
pub(super) struct FitnessWheel {
    cumulative: Vec<f64>,
}

impl FitnessWheel {
    pub(super) fn new<M: PopulationMember>(population: &[M]) -> Self {
        let worst = population
            .iter()
            .map(|m| m.fitness())
            .fold(f64::INFINITY, f64::min);
        let adjustment = (2.0 * worst).min(0.0);

        let cumulative = population
            .iter()
            .scan(0.0, |acc, m| {
                *acc += m.fitness() - adjustment;
                Some(*acc)
            })
            .collect();

        Self { cumulative }
    }

    pub(super) fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// A wheel with no positive finite width cannot be spun.
    pub(super) fn is_degenerate(&self) -> bool {
        let total = self.total();
        !total.is_finite() || total <= 0.0
    }

    /// Index of the first slot whose cumulative sum reaches `point`.
    pub(super) fn index_at(&self, point: f64) -> usize {
        self.cumulative
            .partition_point(|&c| c < point)
            .min(self.cumulative.len() - 1)
    }
}
