//! Fitness-proportionate (roulette wheel) selection.

use super::wheel::FitnessWheel;
use super::{assert_selectable, select_uniform, SelectionStrategy};
use crate::ea::types::PopulationMember;
use crate::random::RandomSource;
use tracing::debug;

/// Roulette wheel selection.
///
/// Each pick is an independent spin: draw `u` in `[0, 1)` and take the first
/// member whose cumulative normalized fitness reaches `u * total`.
///
/// If the wheel has zero or non-finite width (for example every fitness is
/// 0), selection falls back to uniform sampling.
///
/// **Warning**: susceptible to super-individual dominance when fitness
/// variance is high. [`StochasticUniversal`](super::StochasticUniversal)
/// has the same expectation with lower variance.
///
/// # Complexity
/// O(n) to build the wheel, O(log n) per pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roulette;

impl<M: PopulationMember> SelectionStrategy<M> for Roulette {
    fn select<'a>(
        &self,
        population: &'a [M],
        count: usize,
        rng: &mut RandomSource,
    ) -> Vec<&'a M> {
        assert_selectable(population.len(), count);
        if count == 0 {
            return Vec::new();
        }

        let wheel = FitnessWheel::new(population);
        if wheel.is_degenerate() {
            debug!(total = wheel.total(), "roulette wheel has no width, selecting uniformly");
            return select_uniform(population, count, rng);
        }

        let total = wheel.total();
        (0..count)
            .map(|_| &population[wheel.index_at(rng.uniform_real() * total)])
            .collect()
    }

    fn name(&self) -> &'static str {
        "roulette"
    }
}
