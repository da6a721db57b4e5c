//! Truncation selection.
//!
//! Ranks the population by fitness and keeps the best candidates. Ties are
//! broken by insertion order (the sort is stable), so a seeded run always
//! selects the same survivors.

use super::types::Candidate;

/// Keeps the `survivor_count` lowest-fitness candidates.
///
/// Consumes the population, stable-sorts it ascending by fitness, and
/// truncates. The returned survivors stay in ascending fitness order; the
/// runner's best-with-worst pairing relies on that ordering.
///
/// Every candidate must have been evaluated for the current generation
/// before this is called.
///
/// # Panics
/// Panics if the population holds fewer than `survivor_count` candidates.
/// That can only happen through a broken configuration, so it is treated as
/// a fatal precondition failure rather than an error value.
pub fn select_survivors(mut population: Vec<Candidate>, survivor_count: usize) -> Vec<Candidate> {
    assert!(
        population.len() >= survivor_count,
        "population of {} cannot supply {} survivors",
        population.len(),
        survivor_count
    );

    population.sort_by(|a, b| {
        a.fitness
            .partial_cmp(&b.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    population.truncate(survivor_count);
    population
}
