//! Generational Genetic Algorithm for peptide sequences.
//!
//! Users supply a [`FitnessFunction`] (higher is better) and a
//! [`SearchConfig`]; [`SearchEngine`] does the rest and returns a
//! [`SearchHistory`] with one snapshot per generation.
//!
//! # Core Traits
//!
//! - [`FitnessFunction`]: Opaque scoring oracle, possibly stochastic or fallible
//!
//! # Key Types
//!
//! - [`Candidate`]: A peptide and its (possibly unevaluated) fitness
//! - [`SearchConfig`]: Population size, offspring count, generations, seed
//! - [`SearchEngine`]: Executes the generational loop
//! - [`SearchHistory`]: Per-generation `(sequence, fitness)` snapshots
//!
//! # Submodules
//!
//! - [`operators`]: Random initialization, crossover with length repair, mutation
//!
//! # Generation Cycle
//!
//! Each generation re-evaluates the population, breeds `offspring_count`
//! children (tournament → crossover → mutation), merges them in, evaluates the
//! merged pool again, and keeps the `population_size` fittest.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::SearchConfig;
pub use runner::{evaluate_population, next_generation, SearchEngine, SearchHistory, Snapshot};
pub use selection::{select, Tournament};
pub use types::{
    infallible, is_valid_sequence, Candidate, FitnessFunction, InfallibleFitness, ALPHABET,
    MAX_LEN, MIN_LEN, UNEVALUATED_FITNESS,
};
