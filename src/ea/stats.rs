//! Per-generation population statistics.

use super::types::PopulationMember;

/// Fitness summary of one generation.
///
/// Computed by the engine for its `debug!` log line; callbacks can build
/// the same summary with [`GenerationStats::of`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index.
    pub generation: usize,

    /// Highest cached fitness.
    pub best: f64,

    /// Lowest cached fitness.
    pub worst: f64,

    /// Mean cached fitness.
    pub mean: f64,
}

impl GenerationStats {
    /// Summarises `population`. Does not assume any ordering.
    ///
    /// An empty population yields NaN for every fitness field.
    pub fn of<M: PopulationMember>(generation: usize, population: &[M]) -> Self {
        if population.is_empty() {
            return Self {
                generation,
                best: f64::NAN,
                worst: f64::NAN,
                mean: f64::NAN,
            };
        }

        let (best, worst, sum) = population.iter().map(|m| m.fitness()).fold(
            (f64::NEG_INFINITY, f64::INFINITY, 0.0),
            |(best, worst, sum), f| (best.max(f), worst.min(f), sum + f),
        );

        Self {
            generation,
            best,
            worst,
            mean: sum / population.len() as f64,
        }
    }
}
