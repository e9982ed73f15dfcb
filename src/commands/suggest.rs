//! Suggest command
//!
//! Given the guesses made so far on a day, shows what each strategy would
//! play next.

use super::CommandError;
use crate::core::{GuessStatuses, LetterStatus, Word, guess_statuses};
use crate::solver::{Engine, Strategy, StrategyType};

/// One strategy's pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub strategy: &'static str,
    pub guess: Word,
}

/// State of a partially played day plus the next guess per strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub offset: i64,
    /// Guesses so far with their tiles
    pub history: Vec<(Word, GuessStatuses)>,
    /// Candidates left after the history
    pub candidates: usize,
    /// Empty once the day is solved
    pub picks: Vec<Suggestion>,
}

impl Suggestions {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, statuses)| statuses.iter().all(|&s| s == LetterStatus::Correct))
    }
}

/// Suggest next guesses for day `offset`
///
/// # Errors
/// Returns `CommandError::UnknownWord` for a guess outside the word list and
/// `CommandError::Engine` if the history leaves no candidates.
pub fn suggest_guesses(
    engine: &Engine<'_>,
    strategies: &[StrategyType],
    offset: i64,
    guesses: &[Word],
) -> Result<Suggestions, CommandError> {
    if let Some(unknown) = guesses.iter().find(|g| !engine.word_list().contains(g)) {
        return Err(CommandError::UnknownWord(unknown.text().to_string()));
    }

    let solution = engine.word_for_day(offset);
    let history = guesses
        .iter()
        .map(|g| (g.clone(), guess_statuses(g, solution)))
        .collect();

    let mut suggestions = Suggestions {
        offset,
        history,
        candidates: engine.candidates(guesses, solution).len(),
        picks: Vec::new(),
    };
    if suggestions.solved() {
        return Ok(suggestions);
    }

    for strategy in strategies {
        let guess = engine.next_guess(strategy, guesses, solution)?;
        suggestions.picks.push(Suggestion {
            strategy: strategy.name(),
            guess: guess.clone(),
        });
    }

    Ok(suggestions)
}
