//! Genetic operators for bounded integer gene vectors.
//!
//! Free functions over `&[u32]` slices, independent of any candidate
//! bookkeeping: single-point crossover and per-gene reset mutation.

use rand::Rng;

/// Single-point crossover.
///
/// Picks a crossover index `c` uniformly from `[0, L)` and builds one child
/// taking genes before `c` from `parent1` and genes at or after `c` from
/// `parent2`. An index of 0 yields a copy of `parent2`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(parent1: &[u32], parent2: &[u32], rng: &mut R) -> Vec<u32> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(0..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Per-gene reset mutation.
///
/// Each gene position is mutated independently: with probability `rate` the
/// gene is replaced by a fresh uniform draw from the inclusive range
/// `[lo, hi]`, otherwise it is left unchanged. At `rate = 1.0` every gene is
/// redrawn (the new value may coincide with the old one); at `rate = 0.0`
/// no gene changes.
///
/// # Complexity
/// O(n)
pub fn reset_mutation<R: Rng>(genes: &mut [u32], rate: f64, lo: u32, hi: u32, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = rng.random_range(lo..=hi);
        }
    }
}
