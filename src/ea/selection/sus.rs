//! Stochastic universal sampling.

use super::wheel::FitnessWheel;
use super::{assert_selectable, select_uniform, SelectionStrategy};
use crate::ea::types::PopulationMember;
use crate::random::RandomSource;
use rand::seq::SliceRandom;
use tracing::debug;

/// Stochastic universal sampling (SUS).
///
/// Uses the same wheel as [`Roulette`](super::Roulette) but spins it once:
/// `count` pointers spaced `total / count` apart, starting at a single
/// random offset in `[0, step)`. Each member is selected either
/// `floor(expected)` or `ceil(expected)` times, so the spread around the
/// expected count is minimal.
///
/// Pointer picks come out in wheel order, so the result is shuffled before
/// it is returned; otherwise adjacent pairs would mostly mate a member with
/// itself.
///
/// Degenerate wheels fall back to uniform sampling.
///
/// Reference: Baker (1987)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StochasticUniversal;

impl<M: PopulationMember> SelectionStrategy<M> for StochasticUniversal {
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
            debug!(total = wheel.total(), "SUS wheel has no width, selecting uniformly");
            return select_uniform(population, count, rng);
        }

        let step = wheel.total() / count as f64;
        let offset = rng.uniform_real() * step;
        let mut selectees: Vec<&M> = (0..count)
            .map(|i| &population[wheel.index_at(offset + i as f64 * step)])
            .collect();
        selectees.shuffle(rng);
        selectees
    }

    fn name(&self) -> &'static str {
        "sus"
    }
}
