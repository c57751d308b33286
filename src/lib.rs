//! Generational genetic algorithm over variable-length peptide sequences.
//!
//! Searches the space of peptides drawn from the 20-letter amino-acid
//! alphabet for sequences that maximize a caller-supplied fitness function.
//! The fitness function is opaque: it may be an analytic score, a lookup
//! table, or a call into an external (possibly stochastic) oracle.
//!
//! - **Genetic Algorithm (GA)**: random initialization, tournament
//!   selection, single-point crossover with length repair, point/insert/delete
//!   mutation, and truncation survivor selection. See [`ga`].
//!
//! # Example
//!
//! ```
//! use peptide_ga::ga::{infallible, SearchConfig, SearchEngine};
//!
//! let config = SearchConfig::default()
//!     .with_population_size(20)
//!     .with_offspring_count(10)
//!     .with_max_num_generations(5)
//!     .with_seed(7);
//!
//! let count_w = infallible(|seq: &str| seq.matches('W').count() as f64);
//! let engine = SearchEngine::new(count_w, config).unwrap();
//! let history = engine.search().unwrap();
//!
//! assert_eq!(history.len(), 6);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{BoxError, ConfigError, SearchError};
