//! Core types for the GA engine.
//!
//! [`Candidate`] is the solution representation; [`GaProblem`] is the
//! contract between the engine and a domain-specific cost function.

use rand::Rng;

/// A candidate solution: one bounded integer gene per traffic phase.
///
/// Candidates are value-like and cheap to copy. The cached `fitness` is
/// `f64::INFINITY` until the engine evaluates the candidate; it is
/// overwritten fresh every generation before any selection decision reads
/// it, so a stale value never influences the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Gene values, each within the configured inclusive bounds.
    pub genes: Vec<u32>,

    /// Cost of this candidate for the current generation. Lower is better.
    pub fitness: f64,
}

impl Candidate {
    /// Wraps a gene vector as an unevaluated candidate.
    pub fn new(genes: Vec<u32>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a candidate with `length` genes drawn independently and
    /// uniformly from the inclusive range `[lo, hi]`.
    pub fn random<R: Rng>(length: usize, lo: u32, hi: u32, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| rng.random_range(lo..=hi)).collect();
        Self::new(genes)
    }
}

/// Defines the cost side of an optimization problem.
///
/// The engine fixes representation and operators; implementors supply only
/// the scalar cost. Lower cost is better (minimization).
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// candidates in parallel using rayon (with the `parallel` feature).
///
/// # Examples
///
/// ```
/// use greenwave::ga::GaProblem;
///
/// struct TotalGreen;
///
/// impl GaProblem for TotalGreen {
///     fn cost(&self, genes: &[u32]) -> f64 {
///         genes.iter().map(|&g| f64::from(g)).sum()
///     }
/// }
/// ```
pub trait GaProblem: Send + Sync {
    /// Computes the cost of a gene vector. Must be pure and deterministic;
    /// the runner recomputes it every generation.
    fn cost(&self, genes: &[u32]) -> f64;

    /// Called once per generation with the lowest cost observed among that
    /// generation's evaluated population.
    ///
    /// Useful for progress reporting or external communication. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_is_unevaluated() {
        let candidate = Candidate::new(vec![10, 20, 30]);
        assert_eq!(candidate.genes, vec![10, 20, 30]);
        assert!(candidate.fitness.is_infinite());
    }

    #[test]
    fn test_random_genes_within_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let candidate = Candidate::random(4, 10, 60, &mut rng);
            assert_eq!(candidate.genes.len(), 4);
            assert!(
                candidate.genes.iter().all(|&g| (10..=60).contains(&g)),
                "gene out of bounds: {:?}",
                candidate.genes
            );
        }
    }

    #[test]
    fn test_random_bounds_inclusive() {
        let mut rng = create_rng(42);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let candidate = Candidate::random(1, 1, 3, &mut rng);
            seen_lo |= candidate.genes[0] == 1;
            seen_hi |= candidate.genes[0] == 3;
        }
        assert!(seen_lo, "lower bound never drawn");
        assert!(seen_hi, "upper bound never drawn");
    }

    #[test]
    fn test_random_degenerate_range() {
        let mut rng = create_rng(42);
        let candidate = Candidate::random(5, 7, 7, &mut rng);
        assert_eq!(candidate.genes, vec![7; 5]);
    }
}
