//! Peptide construction and variation operators.
//!
//! Every operator here produces a fresh, unevaluated [`Candidate`] whose
//! length lies in `MIN_LEN..=MAX_LEN`. Producers repair their own output;
//! callers never need to.
//!
//! # Construction
//!
//! - [`random_candidate`] / [`generate_random_population`]: uniform length,
//!   uniform symbols
//!
//! # Crossover
//!
//! - [`recombine`]: single-point crossover at a shared fractional cut,
//!   followed by grow-then-clamp length repair
//!
//! # Mutation
//!
//! - [`mutate`]: exactly one of substitution, tail insertion, or tail
//!   deletion, chosen by a single uniform draw

use super::types::{Candidate, ALPHABET, MAX_LEN, MIN_LEN};
use rand::Rng;

/// Upper bound of the draw that selects substitution.
const SUBSTITUTION_THRESHOLD: f64 = 0.3;

/// Upper bound of the draw that selects insertion.
const INSERTION_THRESHOLD: f64 = 0.6;

/// Which mutation operator [`mutate_with_kind`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// One position replaced by a random symbol (possibly the same one).
    Substitution,
    /// One random symbol appended.
    Insertion,
    /// The last symbol removed.
    Deletion,
    /// Insertion at `MAX_LEN` or deletion at `MIN_LEN`; sequence unchanged.
    Unchanged,
}

// ============================================================================
// Construction
// ============================================================================

/// Draws one symbol uniformly from [`ALPHABET`].
pub fn random_symbol<R: Rng>(rng: &mut R) -> char {
    let symbols = ALPHABET.as_bytes();
    symbols[rng.random_range(0..symbols.len())] as char
}

/// Creates an unevaluated candidate with length uniform in
/// `MIN_LEN..=MAX_LEN` and independent uniform symbols.
pub fn random_candidate<R: Rng>(rng: &mut R) -> Candidate {
    let len = rng.random_range(MIN_LEN..=MAX_LEN);
    let sequence: String = (0..len).map(|_| random_symbol(rng)).collect();
    Candidate::new(sequence)
}

/// Creates `population_size` random, unevaluated candidates.
pub fn generate_random_population<R: Rng>(population_size: usize, rng: &mut R) -> Vec<Candidate> {
    (0..population_size).map(|_| random_candidate(rng)).collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover with length repair.
///
/// # Algorithm
///
/// 1. Draw `p` uniformly from `[0, 1)`
/// 2. Child = `parent1[..⌊len1·p⌋] ++ parent2[⌊len2·p⌋..]`; each cut is taken
///    against that parent's own length
/// 3. While shorter than `MIN_LEN`, append a random symbol
/// 4. If longer than `MAX_LEN`, truncate to `MAX_LEN`
///
/// Parents of equal length always yield a child of that length.
///
/// # Complexity
/// O(len1 + len2)
pub fn recombine<R: Rng>(parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Candidate {
    let p: f64 = rng.random();
    let cut1 = fractional_cut(parent1.len(), p);
    let cut2 = fractional_cut(parent2.len(), p);

    let mut sequence = String::with_capacity(cut1 + parent2.len() - cut2 + MIN_LEN);
    sequence.push_str(&parent1.sequence()[..cut1]);
    sequence.push_str(&parent2.sequence()[cut2..]);

    repair_length(&mut sequence, rng);
    Candidate::new(sequence)
}

/// Grows `sequence` with random symbols up to `MIN_LEN`, then clamps it to
/// `MAX_LEN`.
fn repair_length<R: Rng>(sequence: &mut String, rng: &mut R) {
    while sequence.len() < MIN_LEN {
        sequence.push(random_symbol(rng));
    }
    if sequence.len() > MAX_LEN {
        sequence.truncate(MAX_LEN);
    }
    debug_assert!((MIN_LEN..=MAX_LEN).contains(&sequence.len()));
}

/// `⌊len · p⌋`, kept within `0..=len`.
fn fractional_cut(len: usize, p: f64) -> usize {
    ((len as f64 * p) as usize).min(len)
}

// ============================================================================
// Mutation
// ============================================================================

/// Applies one mutation operator and returns the mutated copy.
///
/// The input candidate is left untouched. See [`mutate_with_kind`].
pub fn mutate<R: Rng>(candidate: &Candidate, rng: &mut R) -> Candidate {
    mutate_with_kind(candidate, rng).0
}

/// Applies one mutation operator and reports which one.
///
/// A single draw `r` in `[0, 1)` picks the operator:
///
/// | draw            | operator                               |
/// |-----------------|----------------------------------------|
/// | `r < 0.3`       | substitute a random position           |
/// | `0.3 ≤ r < 0.6` | append a symbol, skipped at `MAX_LEN`  |
/// | `0.6 ≤ r`       | drop the last symbol, skipped at `MIN_LEN` |
///
/// A skipped operator does not fall through to another one; the sequence is
/// returned unchanged and the kind is [`MutationKind::Unchanged`].
pub fn mutate_with_kind<R: Rng>(candidate: &Candidate, rng: &mut R) -> (Candidate, MutationKind) {
    let r: f64 = rng.random();
    let mut sequence = candidate.sequence().to_owned();

    let kind = if r < SUBSTITUTION_THRESHOLD {
        let pos = rng.random_range(0..sequence.len());
        let mut buf = [0u8; 4];
        let symbol = random_symbol(rng).encode_utf8(&mut buf);
        sequence.replace_range(pos..=pos, symbol);
        MutationKind::Substitution
    } else if r < INSERTION_THRESHOLD {
        if sequence.len() < MAX_LEN {
            sequence.push(random_symbol(rng));
            MutationKind::Insertion
        } else {
            MutationKind::Unchanged
        }
    } else if sequence.len() > MIN_LEN {
        sequence.pop();
        MutationKind::Deletion
    } else {
        MutationKind::Unchanged
    };

    debug_assert!((MIN_LEN..=MAX_LEN).contains(&sequence.len()));
    (Candidate::new(sequence), kind)
}

// ============================================================================
// Tests
// ============================================================================
