//! Simulate command
//!
//! Runs every selected strategy over the same day offsets and collects the
//! results for side-by-side comparison.

use crate::output::formatters::simulation_progress;
use crate::solver::{Engine, Execution, SimulationResult, Strategy, StrategyType, simulate_with};

/// Options for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulateConfig {
    /// Games per strategy
    pub samples: usize,
    pub execution: Execution,
    /// Draw an indicatif progress bar on stderr
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(samples: usize) -> Self {
        Self {
            samples,
            execution: Execution::Sequential,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.execution = if parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        };
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Simulate each strategy in turn
///
/// Results come back in the order of `strategies`.
#[must_use]
pub fn run_simulation(
    engine: &Engine<'_>,
    strategies: &[StrategyType],
    config: SimulateConfig,
) -> Vec<SimulationResult> {
    strategies
        .iter()
        .map(|strategy| {
            let pb = simulation_progress(config.samples, strategy.name(), config.show_progress);
            let result = simulate_with(engine, strategy, config.samples, config.execution, |_, _| {
                pb.inc(1);
            });
            pb.finish_and_clear();
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{ALLOWED, ANSWERS};

    #[test]
    fn one_result_per_strategy_in_order() {
        let allowed = words_from_slice(ALLOWED).unwrap();
        let answers = words_from_slice(ANSWERS).unwrap();
        let engine = Engine::new(&allowed, &answers, EngineConfig::default()).unwrap();

        let results = run_simulation(&engine, &StrategyType::all(), SimulateConfig::new(10));
        let names: Vec<&str> = results.iter().map(|r| r.strategy).collect();

        assert_eq!(names, ["distinct", "positional", "occurrences"]);
        for result in &results {
            assert_eq!(result.samples, 10);
            assert_eq!(result.completed + result.aborted, 10);
        }
    }

    #[test]
    fn parallel_config_matches_sequential() {
        let allowed = words_from_slice(ALLOWED).unwrap();
        let answers = words_from_slice(ANSWERS).unwrap();
        let engine = Engine::new(&allowed, &answers, EngineConfig::default()).unwrap();
        let strategies = [StrategyType::all()[1]];

        let sequential = run_simulation(&engine, &strategies, SimulateConfig::new(15));
        let parallel = run_simulation(&engine, &strategies, SimulateConfig::new(15).parallel(true));

        assert_eq!(sequential[0].steps, parallel[0].steps);
        assert_eq!(sequential[0].distribution, parallel[0].distribution);
    }

    #[test]
    fn zero_samples() {
        let words = words_from_slice(&["crane"]).unwrap();
        let engine = Engine::new(&words, &words, EngineConfig::default()).unwrap();
        let results = run_simulation(&engine, &StrategyType::all(), SimulateConfig::new(0));
        assert!(results.iter().all(|r| r.completed == 0));
    }
}
