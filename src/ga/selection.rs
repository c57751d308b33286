//! Tournament selection.
//!
//! Parents are chosen by drawing a random incumbent and letting a fixed
//! number of random challengers replace it when strictly fitter.
//! Fitness is maximized.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use rand::Rng;

/// Tournament selection with `k` draws, with replacement.
///
/// The first draw is the incumbent; each of the remaining `k - 1` draws
/// replaces it only if its fitness is strictly greater, so on ties the
/// earlier draw wins. Unevaluated candidates compete with
/// [`UNEVALUATED_FITNESS`](super::UNEVALUATED_FITNESS).
///
/// ```
/// use peptide_ga::ga::{Candidate, Tournament};
/// use peptide_ga::random::create_rng;
///
/// let pop = vec![Candidate::with_fitness("AAA", 1.0)];
/// let mut rng = create_rng(42);
/// assert_eq!(Tournament::default().select(&pop, &mut rng), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament(pub usize);

impl Default for Tournament {
    fn default() -> Self {
        Tournament(3)
    }
}

impl Tournament {
    /// Select a parent index from the population.
    ///
    /// # Complexity
    /// O(k) per selection
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Candidate], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let n = population.len();
        let mut best_idx = rng.random_range(0..n);
        for _ in 1..self.0.max(1) {
            let idx = rng.random_range(0..n);
            if population[idx].score() > population[best_idx].score() {
                best_idx = idx;
            }
        }
        best_idx
    }
}

/// Picks one parent with a size-3 tournament and returns a reference into
/// `population`.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select<'a, R: Rng>(population: &'a [Candidate], rng: &mut R) -> &'a Candidate {
    &population[Tournament::default().select(population, rng)]
}
