//! Generational search loop.
//!
//! [`SearchEngine`] runs the complete process:
//! initialization → evaluation → selection → crossover → mutation →
//! merge → evaluation → truncation → repeat.

use super::config::SearchConfig;
use super::operators::{generate_random_population, mutate_with_kind, recombine};
use super::selection::Tournament;
use super::types::{Candidate, FitnessFunction};
use crate::error::{ConfigError, SearchError};
use crate::random::create_rng;
use log::{debug, info, trace};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One generation's population as `(sequence, fitness)` pairs.
pub type Snapshot = Vec<(String, f64)>;

/// Per-generation record of a search run.
///
/// Entry 0 is the evaluated initial population; entry `g` is the population
/// that survived generation `g`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchHistory {
    generations: Vec<Snapshot>,
}

impl SearchHistory {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            generations: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, population: &[Candidate]) {
        self.generations.push(
            population
                .iter()
                .map(|c| (c.sequence().to_owned(), c.score()))
                .collect(),
        );
    }

    /// All snapshots, oldest first.
    pub fn generations(&self) -> &[Snapshot] {
        &self.generations
    }

    /// Snapshot of generation `generation`, if recorded.
    pub fn get(&self, generation: usize) -> Option<&Snapshot> {
        self.generations.get(generation)
    }

    /// Number of recorded snapshots (`max_num_generations + 1` after a
    /// completed run).
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// The last recorded population.
    pub fn final_generation(&self) -> Option<&Snapshot> {
        self.generations.last()
    }

    /// Fittest `(sequence, fitness)` of the final generation.
    ///
    /// On ties the entry recorded last wins, which matches the ordering left
    /// by truncation.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.final_generation()?
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(seq, fit)| (seq.as_str(), *fit))
    }

    /// Highest fitness in each snapshot.
    pub fn best_fitness_per_generation(&self) -> Vec<f64> {
        self.generations
            .iter()
            .map(|snapshot| {
                snapshot
                    .iter()
                    .map(|(_, fit)| *fit)
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Consumes the history, returning the raw snapshots.
    pub fn into_inner(self) -> Vec<Snapshot> {
        self.generations
    }
}

/// Executes the generational peptide search.
///
/// # Usage
///
/// ```
/// use peptide_ga::ga::{infallible, SearchConfig, SearchEngine};
///
/// let config = SearchConfig::default()
///     .with_population_size(4)
///     .with_offspring_count(2)
///     .with_max_num_generations(0);
/// let engine = SearchEngine::new(infallible(|s: &str| s.len() as f64), config).unwrap();
///
/// let history = engine.search().unwrap();
/// assert_eq!(history.len(), 1);
/// for (seq, fit) in &history.generations()[0] {
///     assert_eq!(*fit, seq.len() as f64);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<F> {
    fitness: F,
    config: SearchConfig,
}

impl<F: FitnessFunction> SearchEngine<F> {
    /// Creates an engine after validating `config`.
    pub fn new(fitness: F, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { fitness, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn fitness_function(&self) -> &F {
        &self.fitness
    }

    /// Runs the search with a generator seeded from
    /// [`SearchConfig::seed`], or from OS entropy when unset.
    pub fn search(&self) -> Result<SearchHistory, SearchError> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.search_with_rng(&mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// Returns `max_num_generations + 1` snapshots. The first fitness
    /// failure aborts the run and is returned as is.
    pub fn search_with_rng<R: Rng>(&self, rng: &mut R) -> Result<SearchHistory, SearchError> {
        let config = &self.config;
        debug!(
            "starting peptide search: population_size={}, offspring_count={}, generations={}",
            config.population_size, config.offspring_count, config.max_num_generations
        );

        // 1. Initialize and evaluate
        let mut population = generate_random_population(config.population_size, rng);
        evaluate_population(&self.fitness, &mut population, config.parallel)?;

        let mut history = SearchHistory::with_capacity(config.max_num_generations + 1);
        history.record(&population);

        // 2. Generational loop
        for generation in 1..=config.max_num_generations {
            info!(
                "Iteration/Generation: {}/{}",
                generation, config.max_num_generations
            );

            // Re-scored on purpose: a stochastic oracle may drift between calls
            evaluate_population(&self.fitness, &mut population, config.parallel)?;

            let offspring = self.generate_offspring(&population, rng);
            population.extend(offspring);

            evaluate_population(&self.fitness, &mut population, config.parallel)?;
            population = next_generation(population, config.population_size);

            history.record(&population);

            if let Some(best) = population.last() {
                debug!(
                    "generation {}: best fitness {} ({})",
                    generation,
                    best.score(),
                    best.sequence()
                );
            }
        }

        debug!("peptide search finished after {} generations", config.max_num_generations);
        Ok(history)
    }

    /// Produces `offspring_count` children: select, select, recombine, mutate.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn generate_offspring<R: Rng>(&self, population: &[Candidate], rng: &mut R) -> Vec<Candidate> {
        let tournament = Tournament(self.config.tournament_size);
        (0..self.config.offspring_count)
            .map(|_| {
                let parent1 = &population[tournament.select(population, rng)];
                let parent2 = &population[tournament.select(population, rng)];
                let child = recombine(parent1, parent2, rng);
                let (child, kind) = mutate_with_kind(&child, rng);
                trace!("offspring {} via {:?}", child.sequence(), kind);
                child
            })
            .collect()
    }
}

/// Scores every candidate, overwriting any previous fitness.
///
/// Stops at the first failure; candidates after it keep their old fitness.
/// With the `parallel` feature and `parallel == true`, scores are computed
/// on rayon and written back in population order; any failure fails the
/// whole batch.
pub fn evaluate_population<F: FitnessFunction + ?Sized>(
    fitness: &F,
    population: &mut [Candidate],
    parallel: bool,
) -> Result<(), SearchError> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            let scores = population
                .par_iter()
                .map(|candidate| score(fitness, candidate.sequence()))
                .collect::<Result<Vec<f64>, SearchError>>()?;
            for (candidate, s) in population.iter_mut().zip(scores) {
                candidate.set_fitness(s);
            }
            return Ok(());
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for candidate in population.iter_mut() {
        let s = score(fitness, candidate.sequence())?;
        candidate.set_fitness(s);
    }
    Ok(())
}

/// Calls the fitness function and enforces a finite result.
fn score<F: FitnessFunction + ?Sized>(fitness: &F, sequence: &str) -> Result<f64, SearchError> {
    let value = fitness
        .evaluate(sequence)
        .map_err(|source| SearchError::Fitness {
            sequence: sequence.to_owned(),
            source,
        })?;
    if !value.is_finite() {
        return Err(SearchError::NonFiniteFitness {
            sequence: sequence.to_owned(),
            score: value,
        });
    }
    Ok(value)
}

/// Keeps the `population_size` fittest candidates.
///
/// Sorts ascending by fitness with a stable sort and keeps the tail, so the
/// result is ordered worst to best and, among equal fitness, later entries
/// win over earlier ones.
pub fn next_generation(mut population: Vec<Candidate>, population_size: usize) -> Vec<Candidate> {
    debug_assert!(
        population.len() >= population_size,
        "cannot truncate {} candidates to {}",
        population.len(),
        population_size
    );
    population.sort_by(|a, b| a.score().total_cmp(&b.score()));
    let cut = population.len().saturating_sub(population_size);
    population.split_off(cut)
}

// ============================================================================
// Tests
// ============================================================================
