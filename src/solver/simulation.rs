//! Batch simulation
//!
//! Plays one game per day offset `0..samples` and aggregates how many guesses a
//! strategy needed. Samples share nothing, so the parallel runner reduces
//! per-sample tallies and reports exactly what the sequential runner does
//! (wall-clock time aside).

use super::engine::{Engine, GameOutcome};
use super::strategy::Strategy;
use crate::error::EngineError;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How the samples of a batch are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

/// Aggregate result of simulating one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub strategy: &'static str,
    /// Samples requested
    pub samples: usize,
    /// Samples that ran to a win or a loss
    pub completed: usize,
    /// Guesses made across all completed samples
    pub steps: usize,
    /// `steps / completed`
    pub mean_steps: f64,
    /// Wall-clock time for the whole batch
    pub elapsed: Duration,
    pub min_steps: usize,
    pub max_steps: usize,
    /// Games that needed more guesses than the step cap
    pub losses: usize,
    /// Samples abandoned because the candidate set ran dry
    pub aborted: usize,
    /// Number of completed games per guess count
    pub distribution: BTreeMap<usize, usize>,
}

impl SimulationResult {
    /// Fraction of completed games that were lost
    #[must_use]
    pub fn loss_rate(&self) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.losses as f64 / self.completed as f64
        }
    }
}

/// Running totals; merging two tallies is associative
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tally {
    completed: usize,
    steps: usize,
    min_steps: Option<usize>,
    max_steps: usize,
    losses: usize,
    aborted: usize,
    distribution: BTreeMap<usize, usize>,
}

impl Tally {
    fn record(&mut self, sample: usize, result: &Result<GameOutcome, EngineError>) {
        match result {
            Ok(outcome) => {
                let steps = outcome.steps();
                self.completed += 1;
                self.steps += steps;
                self.min_steps = Some(self.min_steps.map_or(steps, |m| m.min(steps)));
                self.max_steps = self.max_steps.max(steps);
                self.losses += usize::from(outcome.lost);
                *self.distribution.entry(steps).or_insert(0) += 1;
            }
            Err(err) => {
                tracing::warn!(sample, error = %err, "sample aborted");
                self.aborted += 1;
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.completed += other.completed;
        self.steps += other.steps;
        self.min_steps = match (self.min_steps, other.min_steps) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_steps = self.max_steps.max(other.max_steps);
        self.losses += other.losses;
        self.aborted += other.aborted;
        for (steps, count) in other.distribution {
            *self.distribution.entry(steps).or_insert(0) += count;
        }
        self
    }

    fn finish(self, strategy: &'static str, samples: usize, elapsed: Duration) -> SimulationResult {
        let mean_steps = if self.completed == 0 {
            0.0
        } else {
            self.steps as f64 / self.completed as f64
        };

        SimulationResult {
            strategy,
            samples,
            completed: self.completed,
            steps: self.steps,
            mean_steps,
            elapsed,
            min_steps: self.min_steps.unwrap_or(0),
            max_steps: self.max_steps,
            losses: self.losses,
            aborted: self.aborted,
            distribution: self.distribution,
        }
    }
}

/// Play the game for day offset `sample`
fn run_sample<S: Strategy + ?Sized>(
    engine: &Engine<'_>,
    strategy: &S,
    sample: usize,
) -> Result<GameOutcome, EngineError> {
    let solution = engine.word_for_day(sample as i64);
    engine.play(strategy, solution)
}

/// Simulate `sample_count` games one after another
///
/// # Examples
/// ```
/// use wordle_heuristics::config::EngineConfig;
/// use wordle_heuristics::core::Word;
/// use wordle_heuristics::solver::{Engine, PositionalStrategy, simulate};
///
/// let list: Vec<Word> = ["cat", "bat", "rat", "mat"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();
///
/// let result = simulate(&engine, &PositionalStrategy, 4);
/// assert_eq!(result.completed, 4);
/// assert_eq!(result.losses, 0);
/// ```
#[must_use]
pub fn simulate<S: Strategy + ?Sized>(
    engine: &Engine<'_>,
    strategy: &S,
    sample_count: usize,
) -> SimulationResult {
    simulate_with(engine, strategy, sample_count, Execution::Sequential, |_, _| {})
}

/// Simulate `sample_count` games on the rayon thread pool
#[must_use]
pub fn simulate_parallel<S: Strategy + ?Sized>(
    engine: &Engine<'_>,
    strategy: &S,
    sample_count: usize,
) -> SimulationResult {
    simulate_with(engine, strategy, sample_count, Execution::Parallel, |_, _| {})
}

/// Simulate with a callback invoked after each sample
///
/// `on_sample` receives the sample index and its outcome; in parallel mode it
/// is called from worker threads in no particular order.
pub fn simulate_with<S, F>(
    engine: &Engine<'_>,
    strategy: &S,
    sample_count: usize,
    execution: Execution,
    on_sample: F,
) -> SimulationResult
where
    S: Strategy + ?Sized,
    F: Fn(usize, &Result<GameOutcome, EngineError>) + Sync,
{
    let start = Instant::now();

    let tally = match execution {
        Execution::Sequential => {
            let mut tally = Tally::default();
            for sample in 0..sample_count {
                let result = run_sample(engine, strategy, sample);
                on_sample(sample, &result);
                tally.record(sample, &result);
            }
            tally
        }
        Execution::Parallel => (0..sample_count)
            .into_par_iter()
            .map(|sample| {
                let result = run_sample(engine, strategy, sample);
                on_sample(sample, &result);
                let mut tally = Tally::default();
                tally.record(sample, &result);
                tally
            })
            .reduce(Tally::default, Tally::merge),
    };

    let result = tally.finish(strategy.name(), sample_count, start.elapsed());
    tracing::info!(
        strategy = result.strategy,
        samples = sample_count,
        mean = result.mean_steps,
        losses = result.losses,
        aborted = result.aborted,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "simulation finished"
    );
    result
}
