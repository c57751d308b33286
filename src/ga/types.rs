//! Core types: the peptide alphabet, [`Candidate`], and [`FitnessFunction`].
//!
//! [`FitnessFunction`] is the contract between the generic engine and the
//! caller's scoring oracle; [`Candidate`] is the unit the engine evolves.

use crate::error::BoxError;

/// The 20 proteinogenic amino-acid one-letter codes.
pub const ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Minimum peptide length, inclusive.
pub const MIN_LEN: usize = 3;

/// Maximum peptide length, inclusive.
pub const MAX_LEN: usize = 50;

/// Fitness reported for a candidate that has not been evaluated yet.
///
/// Selection and truncation compare unevaluated candidates as if they had
/// scored this value.
pub const UNEVALUATED_FITNESS: f64 = 0.0;

/// Returns `true` if `sequence` satisfies the length bounds and uses only
/// symbols from [`ALPHABET`].
pub fn is_valid_sequence(sequence: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&sequence.len())
        && sequence.bytes().all(|b| ALPHABET.as_bytes().contains(&b))
}

/// A peptide paired with its fitness score.
///
/// The sequence never changes after construction. Fitness starts out
/// unevaluated and is overwritten by every evaluation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    sequence: String,
    fitness: Option<f64>,
}

impl Candidate {
    /// Creates an unevaluated candidate.
    ///
    /// The sequence is expected to be over [`ALPHABET`] with length in
    /// `MIN_LEN..=MAX_LEN`; debug builds assert this.
    pub fn new(sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        debug_assert!(
            is_valid_sequence(&sequence),
            "invalid peptide sequence: {sequence:?}"
        );
        Self {
            sequence,
            fitness: None,
        }
    }

    /// Creates a candidate with a known fitness.
    pub fn with_fitness(sequence: impl Into<String>, fitness: f64) -> Self {
        let mut candidate = Self::new(sequence);
        candidate.fitness = Some(fitness);
        candidate
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false` for a valid candidate.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The last evaluated fitness, or `None` if never evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// The fitness used for comparisons: the evaluated value, or
    /// [`UNEVALUATED_FITNESS`].
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(UNEVALUATED_FITNESS)
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}

/// A caller-supplied scoring oracle. Higher scores are better.
///
/// The engine treats it as opaque: it may be stochastic, and it is called
/// for every candidate twice per generation. Returning `Err` aborts the
/// search.
///
/// Implemented for any `Fn(&str) -> Result<f64, E>` closure. Use
/// [`infallible`] to wrap a plain `Fn(&str) -> f64`.
///
/// # Thread Safety
///
/// `FitnessFunction` must be `Send + Sync` because the engine may evaluate
/// candidates in parallel using rayon (`parallel` feature).
pub trait FitnessFunction: Send + Sync {
    /// Scores one peptide.
    fn evaluate(&self, sequence: &str) -> Result<f64, BoxError>;
}

impl<F, E> FitnessFunction for F
where
    F: Fn(&str) -> Result<f64, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn evaluate(&self, sequence: &str) -> Result<f64, BoxError> {
        self(sequence).map_err(Into::into)
    }
}

/// Adapter returned by [`infallible`].
#[derive(Debug, Clone, Copy)]
pub struct InfallibleFitness<F>(F);

impl<F> FitnessFunction for InfallibleFitness<F>
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn evaluate(&self, sequence: &str) -> Result<f64, BoxError> {
        Ok((self.0)(sequence))
    }
}

/// Wraps a scoring function that cannot fail.
///
/// ```
/// use peptide_ga::ga::{infallible, FitnessFunction};
///
/// let length = infallible(|seq: &str| seq.len() as f64);
/// assert_eq!(length.evaluate("ACDE").unwrap(), 4.0);
/// ```
pub fn infallible<F>(f: F) -> InfallibleFitness<F>
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    InfallibleFitness(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.len(), 20);
        let mut symbols: Vec<u8> = ALPHABET.bytes().collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 20, "alphabet symbols must be distinct");
    }

    #[test]
    fn test_is_valid_sequence() {
        assert!(is_valid_sequence("ACD"));
        assert!(is_valid_sequence(&"W".repeat(MAX_LEN)));
        assert!(!is_valid_sequence("AC"));
        assert!(!is_valid_sequence(&"W".repeat(MAX_LEN + 1)));
        assert!(!is_valid_sequence("ABC")); // B is not an amino-acid code
        assert!(!is_valid_sequence("acd"));
    }

    #[test]
    fn test_new_candidate_is_unevaluated() {
        let c = Candidate::new("MKV");
        assert_eq!(c.sequence(), "MKV");
        assert_eq!(c.len(), 3);
        assert!(!c.is_evaluated());
        assert_eq!(c.fitness(), None);
        assert_eq!(c.score(), UNEVALUATED_FITNESS);
    }

    #[test]
    fn test_set_fitness_overwrites() {
        let mut c = Candidate::with_fitness("MKV", 1.5);
        assert_eq!(c.fitness(), Some(1.5));
        c.set_fitness(-2.0);
        assert_eq!(c.fitness(), Some(-2.0));
        assert_eq!(c.score(), -2.0);
    }

    #[test]
    fn test_closure_fitness_function() {
        let f = |seq: &str| -> Result<f64, BoxError> {
            if seq.contains('C') {
                Err("cysteine not allowed".into())
            } else {
                Ok(seq.len() as f64)
            }
        };
        assert_eq!(f.evaluate("AAA").unwrap(), 3.0);
        let err = f.evaluate("ACA").unwrap_err();
        assert_eq!(err.to_string(), "cysteine not allowed");
    }

    #[test]
    fn test_infallible_adapter() {
        let f = infallible(|seq: &str| seq.matches('K').count() as f64);
        assert_eq!(f.evaluate("KKAK").unwrap(), 3.0);
    }
}
