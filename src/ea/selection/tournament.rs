//! Tournament selection with tunable win probability.

use super::{assert_selectable, SelectionStrategy};
use crate::ea::types::{compare_desc, PopulationMember};
use crate::error::ConfigError;
use crate::random::RandomSource;
use rand::seq::index;

/// Tournament selection.
///
/// For every pick, `size` distinct contenders are drawn uniformly without
/// replacement and ranked by fitness. The top contender wins with
/// probability `p`; otherwise the second wins with probability `p` of the
/// remainder, and so on. The last-ranked contender takes whatever is left.
///
/// Higher `size` and higher `p` both increase selection pressure.
/// - `p = 1.0`: the best contender always wins
/// - `p = 0.0`: the worst contender always wins
/// - `size = 1`: uniform random selection
///
/// A `size` larger than the population is clamped to the population size.
/// Contenders with equal fitness are ranked by population position, lower
/// index first.
///
/// # Complexity
/// O(size) per pick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    size: usize,
    p: f64,
}

impl Tournament {
    /// Creates a tournament of `size` contenders where the top-ranked one
    /// wins with probability `p`.
    ///
    /// Parameters are checked by [`SelectionStrategy::validate`].
    pub fn new(size: usize, p: f64) -> Self {
        Self { size, p }
    }

    /// Number of contenders per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Probability that the top-ranked contender wins outright.
    pub fn pressure(&self) -> f64 {
        self.p
    }

    /// Rank (0 = best) of the contender that wins a tournament of `size`.
    fn winning_rank(&self, size: usize, rng: &mut RandomSource) -> usize {
        let u = rng.uniform_real();
        let lose = 1.0 - self.p;

        let mut remaining = lose;
        let mut rank = 0;
        while remaining > u && rank + 1 < size {
            rank += 1;
            remaining *= lose;
        }
        rank
    }
}

impl<M: PopulationMember> SelectionStrategy<M> for Tournament {
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

        let n = population.len();
        let size = self.size.clamp(1, n);

        (0..count)
            .map(|_| {
                let mut contenders = index::sample(rng, n, size).into_vec();
                let rank = self.winning_rank(size, rng);
                let (_, winner, _) = contenders.select_nth_unstable_by(rank, |&a, &b| {
                    compare_desc(population[a].fitness(), population[b].fitness())
                        .then(a.cmp(&b))
                });
                &population[*winner]
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidTournamentSize);
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(ConfigError::InvalidTournamentPressure(self.p));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tournament"
    }
}
