//! Command implementations

pub mod simulate;
pub mod solve;
pub mod suggest;

pub use simulate::{SimulateConfig, run_simulation};
pub use solve::{SolveResult, solve_word};
pub use suggest::{Suggestion, Suggestions, suggest_guesses};

use crate::error::EngineError;

/// Why a command could not run
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
