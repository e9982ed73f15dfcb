//! Word solving command
//!
//! Plays one game against a chosen solution and keeps every step for display.

use super::CommandError;
use crate::core::Word;
use crate::solver::{Engine, GameOutcome, Strategy};

/// Result of solving a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub strategy: &'static str,
    pub outcome: GameOutcome,
    /// Step cap the game was played under
    pub max_steps: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome.solved() && !self.outcome.lost
    }
}

/// Solve `target` with the given strategy
///
/// # Errors
/// Returns `CommandError::UnknownWord` if the target is not in the engine's
/// word list (the filter would never reach it) and `CommandError::Engine` if
/// the game aborts.
pub fn solve_word<S: Strategy + ?Sized>(
    engine: &Engine<'_>,
    strategy: &S,
    target: &Word,
) -> Result<SolveResult, CommandError> {
    if !engine.word_list().contains(target) {
        return Err(CommandError::UnknownWord(target.text().to_string()));
    }

    let outcome = engine.play(strategy, target)?;
    Ok(SolveResult {
        strategy: strategy.name(),
        outcome,
        max_steps: engine.config().max_steps,
    })
}
