//! Ready-made stop conditions.
//!
//! A stop condition is any `FnMut(usize, &[M]) -> bool`; the engine checks
//! it once per generation, before evolving, with the sorted population.

use super::types::PopulationMember;

/// Stops once the generation index exceeds `last`.
///
/// The engine then evolves exactly `last + 1` generations
/// (indices `0..=last`).
pub fn after_generation<M: 'static>(
    last: usize,
) -> impl FnMut(usize, &[M]) -> bool + Send + 'static {
    move |generation, _| generation > last
}

/// Stops once the best member reaches `target` fitness.
pub fn fitness_at_least<M: PopulationMember + 'static>(
    target: f64,
) -> impl FnMut(usize, &[M]) -> bool + Send + 'static {
    move |_, population| population.first().is_some_and(|best| best.fitness() >= target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ea::types::test_support::{make_population, Scored};

    #[test]
    fn test_after_generation() {
        let pop = make_population(&[1.0]);
        let mut stop = after_generation::<Scored>(50);
        assert!(!stop(0, &pop));
        assert!(!stop(50, &pop));
        assert!(stop(51, &pop));
    }

    #[test]
    fn test_fitness_at_least() {
        let mut stop = fitness_at_least::<Scored>(10.0);
        assert!(!stop(0, &make_population(&[9.5, 1.0])));
        assert!(stop(0, &make_population(&[10.0, 1.0])));
        assert!(!stop(0, &make_population(&[])));
    }
}
