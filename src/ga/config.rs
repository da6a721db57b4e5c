//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the genetic algorithm.
///
/// All parameters are fixed for the duration of a run. The defaults
/// describe a small four-phase intersection: a population of 20 candidates
/// with 4 green-time genes in `[10, 60]` seconds, evolved for 50
/// generations with a 10% per-gene mutation rate.
///
/// # Builder Pattern
///
/// ```
/// use greenwave::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_green_bounds(5, 90)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates in the initial population.
    ///
    /// Selection keeps the best `population_size / 2` every generation, so
    /// the working set settles below this value after the first generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Number of genes per candidate (traffic phases).
    pub chromosome_length: usize,

    /// Minimum green time per phase, in seconds. Must be at least 1.
    pub min_green: u32,

    /// Maximum green time per phase, in seconds (inclusive).
    pub max_green: u32,

    /// Probability of resetting each offspring gene to a fresh uniform
    /// draw (0.0 to 1.0). Applied independently per gene position.
    pub mutation_rate: f64,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Requires the `parallel` cargo feature; without it the flag is
    /// accepted and evaluation stays sequential. The cost function is pure,
    /// so seeded runs stay deterministic either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            chromosome_length: 4,
            min_green: 10,
            max_green: 60,
            mutation_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of genes per candidate.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the inclusive green-time bounds in seconds.
    pub fn with_green_bounds(mut self, min_green: u32, max_green: u32) -> Self {
        self.min_green = min_green;
        self.max_green = max_green;
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0.0, 1.0]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid. The
    /// runner refuses to start on an invalid configuration; no evolutionary
    /// step runs against one.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.chromosome_length == 0 {
            return Err("chromosome_length must be at least 1".into());
        }
        if self.min_green == 0 {
            return Err("min_green must be at least 1 second".into());
        }
        if self.min_green > self.max_green {
            return Err("min_green must not exceed max_green".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0.0, 1.0]".into());
        }
        Ok(())
    }
}
