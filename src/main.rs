//! Console front end: optimizes the default four-phase intersection and
//! reports per-generation progress.

use greenwave::ga::{GaConfig, GaProblem, GaRunner};
use greenwave::traffic::WaitingTimeModel;

/// Delegates cost to the waiting-time model and prints one progress line
/// per generation.
struct ConsoleProgress(WaitingTimeModel);

impl GaProblem for ConsoleProgress {
    fn cost(&self, genes: &[u32]) -> f64 {
        self.0.cost(genes)
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        println!("{}", generation_line(generation, best_fitness));
    }
}

fn generation_line(generation: usize, best_fitness: f64) -> String {
    format!("Generation {generation}: Best Fitness = {best_fitness}")
}

fn summary_line(genes: &[u32]) -> String {
    format!("Optimized Green Light Durations (seconds): {genes:?}")
}

fn main() {
    let config = GaConfig::default();
    let problem = ConsoleProgress(WaitingTimeModel::default());

    match GaRunner::run(&problem, &config) {
        Ok(result) => println!("{}", summary_line(&result.best.genes)),
        Err(message) => {
            eprintln!("greenwave: invalid configuration: {message}");
            std::process::exit(1);
        }
    }
}
