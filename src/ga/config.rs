//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the generational loop.

use crate::error::ConfigError;

/// Configuration for a peptide search.
///
/// # Defaults
///
/// ```
/// use peptide_ga::ga::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.offspring_count, 50);
/// assert_eq!(config.max_num_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use peptide_ga::ga::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_population_size(200)
///     .with_offspring_count(80)
///     .with_max_num_generations(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of candidates kept after each generation.
    pub population_size: usize,

    /// Number of offspring produced per generation.
    ///
    /// Offspring are merged with the current population before truncation,
    /// so each generation ranks `population_size + offspring_count`
    /// candidates.
    pub offspring_count: usize,

    /// Number of generations after the initial one.
    ///
    /// Zero is allowed: the search then returns only the evaluated initial
    /// population.
    pub max_num_generations: usize,

    /// Tournament size for parent selection: one incumbent plus
    /// `tournament_size - 1` challengers.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_count: 50,
            max_num_generations: 100,
            tournament_size: 3,
            seed: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring_count(mut self, n: usize) -> Self {
        self.offspring_count = n;
        self
    }

    /// Sets the number of generations after the initial one.
    pub fn with_max_num_generations(mut self, n: usize) -> Self {
        self.max_num_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for a short exploratory run against an expensive oracle.
    ///
    /// - Population: 20, Offspring: 10, Generations: 20
    pub fn quick() -> Self {
        Self {
            population_size: 20,
            offspring_count: 10,
            max_num_generations: 20,
            ..Self::default()
        }
    }

    /// Preset for a long run against a cheap fitness function.
    ///
    /// - Population: 200, Offspring: 100, Generations: 500
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            offspring_count: 100,
            max_num_generations: 500,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.offspring_count == 0 {
            return Err(ConfigError::NoOffspring);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}
