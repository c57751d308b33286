//! Error types.
//!
//! Two kinds of failure reach the caller: a configuration rejected before
//! the search starts, and a fitness function that fails during the search.
//! Length-invariant breaches inside the operators are bugs and are checked
//! with `debug_assert!` rather than reported here.

use thiserror::Error;

/// Boxed error returned by caller-supplied fitness functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid search configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The population must hold at least one candidate.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// At least one offspring must be produced per generation.
    #[error("offspring_count must be at least 1")]
    NoOffspring,

    /// A tournament needs at least the incumbent.
    #[error("tournament_size must be at least 1")]
    EmptyTournament,
}

/// Failure during a search run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The engine was driven with an invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The fitness function failed for a sequence. The run is aborted.
    #[error("fitness evaluation failed for sequence {sequence}")]
    Fitness {
        sequence: String,
        #[source]
        source: BoxError,
    },

    /// The fitness function returned NaN or an infinity.
    #[error("fitness function returned non-finite score {score} for sequence {sequence}")]
    NonFiniteFitness { sequence: String, score: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::EmptyPopulation.to_string(),
            "population_size must be at least 1"
        );
        assert_eq!(
            ConfigError::NoOffspring.to_string(),
            "offspring_count must be at least 1"
        );
    }

    #[test]
    fn test_fitness_error_keeps_source() {
        let err = SearchError::Fitness {
            sequence: "ACD".into(),
            source: "oracle offline".into(),
        };
        assert!(err.to_string().contains("ACD"));
        assert_eq!(err.source().unwrap().to_string(), "oracle offline");
    }

    #[test]
    fn test_config_error_converts() {
        let err: SearchError = ConfigError::EmptyTournament.into();
        assert!(matches!(err, SearchError::Config(ConfigError::EmptyTournament)));
    }
}
