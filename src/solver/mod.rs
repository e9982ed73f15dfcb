//! Guess selection and simulation
//!
//! Candidate filtering, letter statistics, the scoring heuristics, the engine
//! that ties them together and the batch simulation runner.

pub mod day;
mod engine;
pub mod filter;
pub mod frequency;
mod simulation;
pub mod strategy;

pub use engine::{Engine, GameOutcome, GameStep};
pub use filter::{CandidateFilter, filter_candidates};
pub use frequency::{FrequencyStats, StatsMode, build_stats};
pub use simulation::{Execution, SimulationResult, simulate, simulate_parallel, simulate_with};
pub use strategy::{
    DistinctLetterStrategy, OccurrenceStrategy, PositionalStrategy, Strategy, StrategyType,
    select_best_guess,
};
