//! Selection strategies for the EA.
//!
//! A strategy picks the parents for the next generation from the current,
//! fitness-sorted population. Selection is with replacement, and the order
//! of the returned list is the recombination order: entries `2i` and
//! `2i + 1` become the parents of child `i`.
//!
//! | Strategy | Pressure control | Notes |
//! |---|---|---|
//! | [`Truncation`] | `fraction` | deterministic, only the top members breed |
//! | [`Roulette`] | none | fitness-proportionate, independent draws |
//! | [`StochasticUniversal`] | none | fitness-proportionate, evenly spaced pointers |
//! | [`Tournament`] | `size`, `p` | rank-based, robust to fitness scaling |
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

mod roulette;
mod sus;
mod tournament;
mod truncation;
mod wheel;

pub use roulette::Roulette;
pub use sus::StochasticUniversal;
pub use tournament::Tournament;
pub use truncation::Truncation;

use super::types::PopulationMember;
use crate::error::ConfigError;
use crate::random::RandomSource;

/// Picks parents from a population.
///
/// Strategies are stateless with respect to the population: they borrow it
/// and return `count` references into it. Duplicates are allowed.
///
/// The population passed by the engine is always sorted best-first.
pub trait SelectionStrategy<M: PopulationMember>: Send + Sync {
    /// Returns exactly `count` members of `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty and `count > 0`.
    fn select<'a>(&self, population: &'a [M], count: usize, rng: &mut RandomSource)
        -> Vec<&'a M>;

    /// Checks the strategy parameters. Called by the engine before a run.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

fn assert_selectable(len: usize, count: usize) {
    assert!(
        len > 0 || count == 0,
        "cannot select from empty population"
    );
}

/// Uniform selection with replacement; the fallback for degenerate wheels.
fn select_uniform<'a, M>(population: &'a [M], count: usize, rng: &mut RandomSource) -> Vec<&'a M> {
    let last = population.len() - 1;
    (0..count)
        .map(|_| &population[rng.uniform_int(0, last)])
        .collect()
}
