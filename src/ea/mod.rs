//! Generic evolutionary algorithm engine.
//!
//! The engine evolves a fixed-size population of any type implementing
//! [`PopulationMember`]. Each generation it keeps the elites, breeds the
//! rest of the population from parents picked by a [`SelectionStrategy`],
//! mutates the children, and re-ranks everything by fitness.
//!
//! # Key Types
//!
//! - [`EvolutionaryAlgorithm`]: Executes the generational loop
//! - [`EaConfig`]: Population size, elite count, seed, parallelism
//! - [`SelectionStrategy`]: Parent selection; see [`selection`] for the
//!   built-in strategies
//! - [`stop`]: Ready-made stop conditions
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

mod config;
mod runner;
pub mod selection;
mod stats;
pub mod stop;
mod types;

pub use config::{CallbackPlacement, EaConfig};
pub use runner::{EvolutionaryAlgorithm, RunState};
pub use selection::{Roulette, SelectionStrategy, StochasticUniversal, Tournament, Truncation};
pub use stats::GenerationStats;
pub use types::{fitness_descending, PopulationMember};
