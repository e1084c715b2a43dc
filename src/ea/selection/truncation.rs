//! Truncation selection.

use super::{assert_selectable, SelectionStrategy};
use crate::ea::types::PopulationMember;
use crate::error::ConfigError;
use crate::random::RandomSource;
use rand::seq::SliceRandom;

/// Truncation selection: only the top `fraction` of the population breeds.
///
/// The result is filled by cycling over the first
/// `max(floor(n * fraction), 1)` members, then shuffled so that who mates
/// with whom does not follow the fill order. Expects a best-first sorted
/// population.
///
/// # Examples
///
/// ```
/// use u_evolve::ea::Truncation;
///
/// // Only the best 5% become parents.
/// let sel = Truncation::new(0.05);
/// assert_eq!(sel.fraction(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truncation {
    fraction: f64,
}

impl Truncation {
    /// Creates a truncation strategy keeping the top `fraction` in `(0, 1]`.
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Fraction of the population eligible as parents.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Number of top members eligible for a population of `len`.
    fn cutoff(&self, len: usize) -> usize {
        ((len as f64 * self.fraction) as usize).clamp(1, len)
    }
}

impl<M: PopulationMember> SelectionStrategy<M> for Truncation {
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

        let cutoff = self.cutoff(population.len());
        let mut selectees: Vec<&M> = population[..cutoff].iter().cycle().take(count).collect();
        selectees.shuffle(rng);
        selectees
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fraction > 0.0 && self.fraction <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTruncationFraction(self.fraction))
        }
    }

    fn name(&self) -> &'static str {
        "truncation"
    }
}
