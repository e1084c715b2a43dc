//! Core trait definitions for the EA engine.
//!
//! [`PopulationMember`] is the contract between the generic engine and a
//! domain-specific candidate solution.

use crate::random::RandomSource;
use std::cmp::Ordering;
use std::fmt;

/// A candidate solution in the EA population.
///
/// Members carry their own cached fitness. The engine calls
/// [`evaluate`](PopulationMember::evaluate) once per generation, which stores
/// the result of [`evaluate_fitness`](PopulationMember::evaluate_fitness).
/// **Higher fitness is better.**
///
/// Crossover takes both parents as `&Self`, so parent and child types always
/// match at compile time.
///
/// The [`Display`](fmt::Display) implementation is the member's diagnostic
/// rendering; it must be deterministic for a given genotype.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     fitness: f64,
/// }
///
/// impl PopulationMember for MySolution {
///     fn random(rng: &mut RandomSource) -> Self { /* ... */ }
///     fn evaluate_fitness(&self) -> f64 { -self.genes.iter().map(|x| x * x).sum::<f64>() }
///     fn fitness(&self) -> f64 { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = f; }
///     fn crossover(&mut self, a: &Self, b: &Self, rng: &mut RandomSource) { /* ... */ }
///     fn mutate(&mut self, rng: &mut RandomSource) { /* ... */ }
/// }
/// ```
pub trait PopulationMember: Clone + Send + Sync + fmt::Display {
    /// Creates a member with a fresh (typically random) genotype.
    ///
    /// Used to fill the initial population.
    fn random(rng: &mut RandomSource) -> Self;

    /// Computes the fitness of the current genotype.
    ///
    /// Must be a pure function of the genotype. This is typically the most
    /// expensive operation; the engine may call it in parallel.
    fn evaluate_fitness(&self) -> f64;

    /// Returns the cached fitness without recomputing it.
    fn fitness(&self) -> f64;

    /// Stores a fitness value.
    fn set_fitness(&mut self, fitness: f64);

    /// Recomputes and caches the fitness.
    fn evaluate(&mut self) {
        let fitness = self.evaluate_fitness();
        self.set_fitness(fitness);
    }

    /// Replaces this member's genotype with a child of `parent_a` and
    /// `parent_b`.
    ///
    /// Any prior genotype is discarded. The cached fitness is stale until
    /// the next [`evaluate`](PopulationMember::evaluate).
    fn crossover(&mut self, parent_a: &Self, parent_b: &Self, rng: &mut RandomSource);

    /// Stochastically perturbs the genotype in place.
    fn mutate(&mut self, rng: &mut RandomSource);
}

/// Orders members best-first by cached fitness. NaN fitness sorts last.
pub fn fitness_descending<M: PopulationMember>(a: &M, b: &M) -> Ordering {
    compare_desc(a.fitness(), b.fitness())
}

pub(crate) fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}


#[cfg(test)]
mod tests {
    use super::test_support::make_population;
    use super::*;

    #[test]
    fn test_sort_descending() {
        let mut pop = make_population(&[1.0, 5.0, -2.0, 3.0]);
        pop.sort_by(fitness_descending);
        let order: Vec<usize> = pop.iter().map(|m| m.id).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut pop = make_population(&[f64::NAN, 1.0, -10.0]);
        pop.sort_by(fitness_descending);
        assert_eq!(pop[0].id, 1);
        assert_eq!(pop[1].id, 2);
        assert!(pop[2].fit.is_nan());
    }

    #[test]
    fn test_evaluate_caches_fitness() {
        let mut rng = RandomSource::from_seed(1);
        let mut m = test_support::Scored::random(&mut rng);
        let expected = m.evaluate_fitness();
        m.evaluate();
        assert_eq!(m.fitness(), expected);

        m.set_fitness(-1.0);
        assert_eq!(m.fitness(), -1.0);
        m.evaluate();
        assert_eq!(m.fitness(), expected);
    }

    #[test]
    fn test_fitness_stale_until_evaluated() {
        let mut m = make_population(&[3.0]).remove(0);
        m.value = 8.0;
        assert_eq!(m.fitness(), 3.0);
        assert_eq!(m.evaluate_fitness(), 8.0);
        m.evaluate();
        assert_eq!(m.fitness(), 8.0);
    }
}
