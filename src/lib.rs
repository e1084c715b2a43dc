//! Generic evolutionary algorithm engine.
//!
//! - [`ea`]: The generational loop, pluggable parent selection
//!   (truncation, roulette, stochastic universal sampling, tournament)
//!   and stop conditions.
//! - [`bitstring`]: A ready-made population member over grouped bitstring
//!   genotypes, with group crossover and Poisson mutation.
//! - [`RandomSource`]: Seedable random stream shared by the engine and the
//!   member operators.
//!
//! # Example
//!
//! ```
//! use u_evolve::bitstring::{BitstringMember, GroupEncoding};
//! use u_evolve::ea::{stop, EaConfig, EvolutionaryAlgorithm, PopulationMember, Truncation};
//!
//! /// Maximize the number of set bits.
//! struct OneMax;
//!
//! impl GroupEncoding for OneMax {
//!     const GROUPS: &'static [usize] = &[8, 8];
//!
//!     fn evaluate_fitness(member: &BitstringMember<Self>) -> f64 {
//!         member.bits().iter().filter(|&&b| b).count() as f64
//!     }
//! }
//!
//! let mut ea = EvolutionaryAlgorithm::<BitstringMember<OneMax>>::with_config(
//!     EaConfig::default().with_population_size(30).with_elite_count(2).with_seed(42),
//! );
//! ea.set_selection_strategy(Truncation::new(0.5));
//! ea.set_stop_condition(stop::after_generation(20));
//!
//! let population = ea.run();
//! assert_eq!(population.len(), 30);
//! assert!(population[0].fitness() >= population[29].fitness());
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate and sort with rayon when
//!   [`EaConfig::parallel`](ea::EaConfig::parallel) is set.
//! - `serde`: serialize configuration and statistics types.

pub mod bitstring;
pub mod ea;
pub mod error;
pub mod random;

pub use error::{ConfigError, LayoutError};
pub use random::RandomSource;
