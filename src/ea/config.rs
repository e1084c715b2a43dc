//! EA configuration.
//!
//! [`EaConfig`] holds the integer settings and switches that control the
//! generational loop. The selection strategy, stop condition and callback
//! are set directly on the engine because they are behaviour, not data.

use crate::error::ConfigError;

/// When the per-generation callback fires relative to the evolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallbackPlacement {
    /// Before selection: the callback sees generation `g` exactly as the
    /// stop condition just did.
    #[default]
    BeforeStep,

    /// After the new generation is evaluated and sorted, still labelled
    /// with the index `g` of the step that produced it.
    AfterStep,
}

/// Configuration for the evolutionary algorithm.
///
/// # Defaults
///
/// ```
/// use u_evolve::ea::EaConfig;
///
/// let config = EaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ea::{CallbackPlacement, EaConfig};
///
/// let config = EaConfig::default()
///     .with_population_size(40)
///     .with_elite_count(2)
///     .with_callback_placement(CallbackPlacement::AfterStep)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EaConfig {
    /// Number of members in the population. Must be at least 1.
    pub population_size: usize,

    /// Number of top members carried unmodified into the next generation.
    ///
    /// Must not exceed `population_size`. Elites are never mutated.
    pub elite_count: usize,

    /// Whether to evaluate and sort in parallel using rayon.
    ///
    /// Ignored when the crate is built without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// When set, every run restarts the engine's random source from this
    /// seed. `None` keeps drawing from the engine's own stream.
    pub seed: Option<u64>,

    /// Where the callback is invoked within each generation.
    pub callback_placement: CallbackPlacement,
}

impl Default for EaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_count: 1,
            parallel: false,
            seed: None,
            callback_placement: CallbackPlacement::default(),
        }
    }
}

impl EaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Enables or disables parallel evaluation and sorting.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the callback placement.
    pub fn with_callback_placement(mut self, placement: CallbackPlacement) -> Self {
        self.callback_placement = placement;
        self
    }

    /// Number of parents requested from the selection strategy each
    /// generation: two per non-elite child.
    pub fn selectee_count(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count) * 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elite_count > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}
