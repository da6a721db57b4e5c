//! Genetic-algorithm optimizer for traffic-signal green-time allocation.
//!
//! Searches for a vector of green-light durations (one integer per traffic
//! phase, bounded in seconds) that minimizes an aggregate waiting-time cost.
//! The evolutionary mechanics are fixed: truncation selection keeps the best
//! half of the population, survivors are paired best-with-worst for
//! single-point crossover, and offspring genes are reset-mutated per
//! position. The cost function is pluggable via [`ga::GaProblem`].
//!
//! # Modules
//!
//! - [`ga`]: The evolutionary engine. Population, selection, crossover,
//!   mutation, and the generational loop.
//! - [`traffic`]: The provided waiting-time cost model. A placeholder for a
//!   calibrated traffic simulation, not a model of real dynamics.
//! - [`random`]: Seeded random-generator construction for reproducible runs.
//!
//! # Quick Start
//!
//! ```
//! use greenwave::ga::{GaConfig, GaRunner};
//! use greenwave::traffic::WaitingTimeModel;
//!
//! let config = GaConfig::default().with_seed(42);
//! let model = WaitingTimeModel::default();
//! let result = GaRunner::run(&model, &config).unwrap();
//! assert!(result.best.genes.iter().all(|&g| (10..=60).contains(&g)));
//! ```

pub mod ga;
pub mod random;
pub mod traffic;
