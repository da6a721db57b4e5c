//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{reset_mutation, single_point_crossover};
use super::selection::select_survivors;
use super::types::{Candidate, GaProblem};
use crate::random::create_rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Statistics recorded for one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Lowest fitness among this generation's evaluated population.
    pub best_fitness: f64,

    /// Population size entering this generation.
    pub population_size: usize,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The lowest-cost candidate in the final population, with its fitness
    /// recomputed after the last generation.
    pub best: Candidate,

    /// Fitness of `best` (same as `best.fitness`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics, one entry per generation.
    pub history: Vec<GenerationStats>,

    /// The population left standing after the last generation, freshly
    /// evaluated.
    pub final_population: Vec<Candidate>,
}

/// Executes the GA generational loop.
///
/// Each generation evaluates every candidate, keeps the best
/// `population_size / 2` as survivors, pairs the i-th best survivor with
/// the i-th worst for single-point crossover (one child per pair), mutates
/// every child per gene, and continues with survivors plus offspring.
///
/// Offspring count is `survivors / 2`, so the working population is not
/// replenished to `population_size`: it settles at survivors plus half of
/// survivors after the first generation (20 → 15, then steady), and at a
/// single candidate for the smallest populations. `GenerationStats`
/// records the size entering each generation.
///
/// # Usage
///
/// ```
/// use greenwave::ga::{GaConfig, GaRunner};
/// use greenwave::traffic::WaitingTimeModel;
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&WaitingTimeModel::default(), &config).unwrap();
/// assert_eq!(result.history.len(), 50);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization.
    ///
    /// Returns `Err` with a description if the configuration is invalid;
    /// nothing is evaluated in that case. Mid-run invariant violations
    /// (which no validated configuration can reach) panic immediately.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| {
                Candidate::random(
                    config.chromosome_length,
                    config.min_green,
                    config.max_green,
                    &mut rng,
                )
            })
            .collect();

        let survivor_count = config.population_size / 2;
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            evaluate_population(problem, &mut population, config.parallel);

            let generation_best = find_best(&population).fitness;
            history.push(GenerationStats {
                generation,
                best_fitness: generation_best,
                population_size: population.len(),
            });
            problem.on_generation(generation, generation_best);

            let mut survivors = select_survivors(population, survivor_count);

            // One child per (best, worst) survivor pair; an odd middle
            // survivor is never a parent.
            let pair_count = survivors.len() / 2;
            let mut offspring: Vec<Candidate> = (0..pair_count)
                .map(|i| {
                    let parent1 = &survivors[i];
                    let parent2 = &survivors[survivors.len() - 1 - i];
                    Candidate::new(single_point_crossover(
                        &parent1.genes,
                        &parent2.genes,
                        &mut rng,
                    ))
                })
                .collect();

            for child in &mut offspring {
                reset_mutation(
                    &mut child.genes,
                    config.mutation_rate,
                    config.min_green,
                    config.max_green,
                    &mut rng,
                );
            }

            survivors.append(&mut offspring);
            population = survivors;
        }

        // Final scan with fitness recomputed fresh, not reusing any
        // per-generation value.
        evaluate_population(problem, &mut population, config.parallel);
        let best = find_best(&population).clone();

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: config.generations,
            history,
            final_population: population,
        })
    }
}

/// Recomputes the fitness of every candidate.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [Candidate], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|candidate| {
                candidate.fitness = problem.cost(&candidate.genes);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for candidate in population.iter_mut() {
        candidate.fitness = problem.cost(&candidate.genes);
    }
}

/// Finds the candidate with the lowest fitness.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
