//! Error types.
//!
//! Both enums describe programming errors that can be detected before any
//! stochastic work starts. Validation functions return them as `Result`s;
//! [`EvolutionaryAlgorithm::run`](crate::ea::EvolutionaryAlgorithm::run)
//! turns them into a panic carrying the message.

use thiserror::Error;

/// Invalid engine or selection-strategy configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("elite_count ({elite_count}) exceeds population_size ({population_size})")]
    EliteExceedsPopulation {
        elite_count: usize,
        population_size: usize,
    },

    #[error("no selection strategy configured")]
    MissingSelection,

    #[error("no stop condition configured")]
    MissingStopCondition,

    #[error("truncation fraction must be in (0, 1], got {0}")]
    InvalidTruncationFraction(f64),

    #[error("tournament size must be at least 1")]
    InvalidTournamentSize,

    #[error("tournament pressure must be in [0, 1], got {0}")]
    InvalidTournamentPressure(f64),
}

/// Invalid bitstring group layout or genotype.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("a bitstring layout needs at least 2 groups, got {0}")]
    TooFewGroups(usize),

    #[error("group {index} has width 0")]
    EmptyGroup { index: usize },

    #[error("genotype length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
