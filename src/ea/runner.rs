//! EA generational loop.
//!
//! [`EvolutionaryAlgorithm`] orchestrates the evolutionary process:
//! initialization → evaluation → sort → stop check → selection →
//! recombination → mutation → repeat.

use super::config::{CallbackPlacement, EaConfig};
use super::selection::SelectionStrategy;
use super::stats::GenerationStats;
use super::types::{fitness_descending, PopulationMember};
use crate::error::ConfigError;
use crate::random::RandomSource;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, Level};

type StopCondition<M> = Box<dyn FnMut(usize, &[M]) -> bool + Send>;
type Callback<M> = Box<dyn FnMut(usize, &[M]) + Send>;

/// Lifecycle of an [`EvolutionaryAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Selection strategy or stop condition still missing.
    Unconfigured,

    /// Ready to run.
    Configured,

    /// Inside [`EvolutionaryAlgorithm::run`].
    Running,

    /// The last run finished after evolving `generations` generations.
    /// The engine may be run again.
    Completed { generations: usize },
}

/// Executes the evolutionary loop for members of type `M`.
///
/// Configure with the setters, then call [`run`](Self::run) to receive the
/// evolved population sorted best-first. The engine can be re-run with the
/// same or modified settings.
///
/// # Usage
///
/// ```ignore
/// let mut ea = EvolutionaryAlgorithm::<MyMember>::new();
/// ea.set_population_size(40);
/// ea.set_elite_count(2);
/// ea.set_selection_strategy(Truncation::new(0.5));
/// ea.set_stop_condition(stop::after_generation(50));
/// let population = ea.run();
/// println!("best: {}", population[0]);
/// ```
pub struct EvolutionaryAlgorithm<M: PopulationMember> {
    config: EaConfig,
    selection: Option<Arc<dyn SelectionStrategy<M>>>,
    stop_condition: Option<StopCondition<M>>,
    callback: Option<Callback<M>>,
    rng: RandomSource,
    state: RunState,
}

impl<M: PopulationMember> Default for EvolutionaryAlgorithm<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PopulationMember> fmt::Debug for EvolutionaryAlgorithm<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvolutionaryAlgorithm")
            .field("config", &self.config)
            .field("selection", &self.selection.as_ref().map(|s| s.name()))
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<M: PopulationMember> EvolutionaryAlgorithm<M> {
    /// Creates an unconfigured engine with default settings and an
    /// entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_config(EaConfig::default())
    }

    /// Creates an engine with the given settings.
    pub fn with_config(config: EaConfig) -> Self {
        Self {
            config,
            selection: None,
            stop_condition: None,
            callback: None,
            rng: RandomSource::from_entropy(),
            state: RunState::Unconfigured,
        }
    }

    /// Sets the selection strategy.
    pub fn set_selection_strategy<S>(&mut self, strategy: S)
    where
        S: SelectionStrategy<M> + 'static,
    {
        self.set_shared_selection_strategy(Arc::new(strategy));
    }

    /// Sets a selection strategy that may be shared with other engines.
    pub fn set_shared_selection_strategy(&mut self, strategy: Arc<dyn SelectionStrategy<M>>) {
        self.selection = Some(strategy);
        self.refresh_state();
    }

    /// Sets the stop condition. The run ends as soon as it returns `true`.
    ///
    /// It receives the generation index and the sorted population, and is
    /// consulted once per generation before evolving.
    pub fn set_stop_condition<F>(&mut self, stop: F)
    where
        F: FnMut(usize, &[M]) -> bool + Send + 'static,
    {
        self.stop_condition = Some(Box::new(stop));
        self.refresh_state();
    }

    /// Sets the per-generation observer. Optional.
    ///
    /// Called once per evolved generation with the generation index and the
    /// sorted population; see [`CallbackPlacement`] for exactly when.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize, &[M]) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Removes the per-generation observer.
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, n: usize) {
        self.config.population_size = n;
    }

    /// Sets the number of elites.
    pub fn set_elite_count(&mut self, n: usize) {
        self.config.elite_count = n;
    }

    /// Replaces all numeric settings at once.
    pub fn set_config(&mut self, config: EaConfig) {
        self.config = config;
    }

    /// Replaces the random source used for runs without a configured seed.
    pub fn set_random_source(&mut self, rng: RandomSource) {
        self.rng = rng;
    }

    /// Current settings.
    pub fn config(&self) -> &EaConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Checks settings, strategy parameters and required collaborators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        let selection = self.selection.as_ref().ok_or(ConfigError::MissingSelection)?;
        selection.validate()?;
        if self.stop_condition.is_none() {
            return Err(ConfigError::MissingStopCondition);
        }
        Ok(())
    }

    /// Runs the algorithm.
    ///
    /// Returns the final population sorted by fitness, best first.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`validate`](Self::validate) or [`try_run`](Self::try_run) to get the
    /// error instead).
    pub fn run(&mut self) -> Vec<M> {
        self.try_run()
            .unwrap_or_else(|e| panic!("invalid evolutionary algorithm configuration: {e}"))
    }

    /// Runs the algorithm, reporting misconfiguration as an error.
    pub fn try_run(&mut self) -> Result<Vec<M>, ConfigError> {
        self.validate()?;

        let Self {
            config,
            selection,
            stop_condition,
            callback,
            rng,
            state,
        } = self;
        let (Some(selection), Some(stop)) = (selection.as_ref(), stop_condition.as_mut()) else {
            unreachable!("validate checks selection and stop condition");
        };

        if let Some(seed) = config.seed {
            *rng = RandomSource::from_seed(seed);
        }
        *state = RunState::Running;

        let population_size = config.population_size;
        let elite_count = config.elite_count;
        let selectee_count = config.selectee_count();
        info!(
            population_size,
            elite_count,
            selection = selection.name(),
            "starting evolutionary run"
        );

        // 1. Initialize and rank
        let mut population: Vec<M> = (0..population_size).map(|_| M::random(rng)).collect();
        evaluate_and_sort(&mut population, config.parallel);

        // 2. Generational loop
        let mut generation = 0usize;
        while !stop(generation, &population) {
            if config.callback_placement == CallbackPlacement::BeforeStep {
                if let Some(cb) = callback.as_mut() {
                    cb(generation, &population);
                }
            }

            let children = breed(&population, &**selection, selectee_count, rng);

            // Elites survive verbatim; children fill the rest.
            population.truncate(elite_count);
            population.extend(children);
            debug_assert_eq!(population.len(), population_size);

            for member in &mut population[elite_count..] {
                member.mutate(rng);
            }

            evaluate_and_sort(&mut population, config.parallel);

            if config.callback_placement == CallbackPlacement::AfterStep {
                if let Some(cb) = callback.as_mut() {
                    cb(generation, &population);
                }
            }

            if tracing::enabled!(Level::DEBUG) {
                let stats = GenerationStats::of(generation, &population);
                debug!(
                    generation,
                    best = stats.best,
                    worst = stats.worst,
                    mean = stats.mean,
                    "generation evolved"
                );
            }

            generation += 1;
        }

        *state = RunState::Completed {
            generations: generation,
        };
        info!(
            generations = generation,
            best_fitness = population.first().map(|m| m.fitness()),
            "evolutionary run completed"
        );

        Ok(population)
    }

    fn refresh_state(&mut self) {
        self.state = if self.selection.is_some() && self.stop_condition.is_some() {
            RunState::Configured
        } else {
            RunState::Unconfigured
        };
    }
}

/// Selects `selectee_count` parents and builds one child per adjacent pair.
fn breed<M: PopulationMember>(
    population: &[M],
    selection: &dyn SelectionStrategy<M>,
    selectee_count: usize,
    rng: &mut RandomSource,
) -> Vec<M> {
    assert!(
        selectee_count % 2 == 0,
        "selectee count must be even, got {selectee_count}"
    );
    let selectees = selection.select(population, selectee_count, rng);
    assert_eq!(
        selectees.len(),
        selectee_count,
        "selection strategy `{}` returned the wrong number of selectees",
        selection.name()
    );

    selectees
        .chunks_exact(2)
        .map(|pair| {
            let mut child = pair[0].clone();
            child.crossover(pair[0], pair[1], rng);
            child
        })
        .collect()
}

/// Evaluate every member and sort best-first.
#[cfg(feature = "parallel")]
fn evaluate_and_sort<M: PopulationMember>(population: &mut [M], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|member| member.evaluate());
        population.par_sort_by(fitness_descending);
    } else {
        evaluate_and_sort_sequential(population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_and_sort<M: PopulationMember>(population: &mut [M], _parallel: bool) {
    evaluate_and_sort_sequential(population);
}

fn evaluate_and_sort_sequential<M: PopulationMember>(population: &mut [M]) {
    for member in population.iter_mut() {
        member.evaluate();
    }
    population.sort_by(fitness_descending);
}

// ============================================================================
// Tests
// ============================================================================
