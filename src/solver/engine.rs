//! Main engine interface
//!
//! Ties filtering, frequency stats and a strategy together: one call picks the
//! next guess, another plays a whole game against a known solution.

use super::day::{self, DaySolution};
use super::filter::filter_candidates;
use super::frequency::FrequencyStats;
use super::strategy::Strategy;
use crate::config::EngineConfig;
use crate::core::{GuessStatuses, Word, guess_statuses};
use crate::error::EngineError;

/// One turn of a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStep {
    pub guess: Word,
    pub statuses: GuessStatuses,
    /// Candidates the guess was chosen from
    pub candidates: usize,
}

/// A game played to completion (or to the step cap)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub solution: Word,
    pub turns: Vec<GameStep>,
    /// True if the game needed more guesses than the step cap
    pub lost: bool,
}

impl GameOutcome {
    /// Number of guesses made
    #[must_use]
    pub fn steps(&self) -> usize {
        self.turns.len()
    }

    /// True if the last guess was the solution
    #[must_use]
    pub fn solved(&self) -> bool {
        self.turns.last().is_some_and(|t| t.guess == self.solution)
    }
}

/// Word-guessing engine
///
/// Holds validated word lists and configuration. Every method is a pure
/// computation over them, so one engine can serve many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    word_list: &'a [Word],
    solutions: &'a [Word],
    config: EngineConfig,
}

impl<'a> Engine<'a> {
    /// Create an engine over a master word list and a solution list
    ///
    /// # Parameters
    /// - `word_list`: Every word accepted as a guess; candidates come from here
    /// - `solutions`: Words the day resolver picks solutions from
    /// - `config`: Word length and step cap
    ///
    /// # Errors
    /// Returns `EngineError::Config` if the config is invalid, either list is
    /// empty, or any word does not have the configured length.
    pub fn new(
        word_list: &'a [Word],
        solutions: &'a [Word],
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        config.validate_words("guess", word_list)?;
        config.validate_words("solution", solutions)?;

        Ok(Self {
            word_list,
            solutions,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_list(&self) -> &'a [Word] {
        self.word_list
    }

    #[must_use]
    pub const fn solutions(&self) -> &'a [Word] {
        self.solutions
    }

    /// Words of the master list still consistent with the guess history
    #[must_use]
    pub fn candidates(&self, guesses: &[Word], solution: &Word) -> Vec<&'a Word> {
        filter_candidates(self.word_list, guesses, solution)
    }

    /// Pick the next guess for a game in progress
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidates` if no word of the master list fits
    /// the history, which happens when the history and solution contradict
    /// each other (for instance a solution missing from the master list).
    pub fn next_guess<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        guesses: &[Word],
        solution: &Word,
    ) -> Result<&'a Word, EngineError> {
        self.choose(strategy, guesses, solution)
            .map(|(guess, _)| guess)
    }

    /// Filter, count and score; returns the guess and the candidate count
    fn choose<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        guesses: &[Word],
        solution: &Word,
    ) -> Result<(&'a Word, usize), EngineError> {
        let candidates = self.candidates(guesses, solution);
        let stats =
            FrequencyStats::build(&candidates, strategy.stats_mode(), self.config.word_length);

        let guess = strategy
            .select_guess(&candidates, &stats)
            .ok_or(EngineError::NoCandidates {
                guesses: guesses.len(),
            })?;

        Ok((guess, candidates.len()))
    }

    /// Play a full game against `solution`
    ///
    /// The game ends when the strategy guesses the solution or when the number
    /// of guesses exceeds the step cap. A game that needs more guesses than the
    /// cap is lost; one solved exactly at the cap is won.
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidates` if the candidate set runs dry before
    /// the solution is found.
    pub fn play<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        solution: &Word,
    ) -> Result<GameOutcome, EngineError> {
        let mut guesses: Vec<Word> = Vec::new();
        let mut turns = Vec::new();

        loop {
            let (guess, candidates) = self.choose(strategy, &guesses, solution)?;
            let statuses = guess_statuses(guess, solution);

            tracing::trace!(
                solution = %solution,
                turn = guesses.len() + 1,
                guess = %guess,
                candidates,
                "guess chosen"
            );

            turns.push(GameStep {
                guess: guess.clone(),
                statuses,
                candidates,
            });
            guesses.push(guess.clone());

            if guess == solution || guesses.len() > self.config.max_steps {
                break;
            }
        }

        let lost = turns.len() > self.config.max_steps;
        tracing::debug!(
            solution = %solution,
            strategy = strategy.name(),
            steps = turns.len(),
            lost,
            "game finished"
        );

        Ok(GameOutcome {
            solution: solution.clone(),
            turns,
            lost,
        })
    }

    /// The solution word for a day offset
    #[must_use]
    pub fn word_for_day(&self, offset: i64) -> &'a Word {
        let index = day::day_index(offset, self.solutions.len()).unwrap_or_default();
        &self.solutions[index]
    }

    /// The solution for a day offset with its index and next-day timestamp
    #[must_use]
    pub fn solution_for_day(&self, offset: i64) -> Option<DaySolution<'a>> {
        day::solution_for_day(offset, self.solutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct};
    use crate::error::ConfigError;
    use crate::solver::frequency::StatsMode;
    use crate::solver::strategy::{PositionalStrategy, StrategyType};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    /// Scores the given word above everything else
    struct Prefer(Word);

    impl Strategy for Prefer {
        fn name(&self) -> &'static str {
            "prefer"
        }

        fn stats_mode(&self) -> StatsMode {
            StatsMode::Aggregate
        }

        fn score(&self, word: &Word, _: &FrequencyStats) -> u64 {
            u64::from(*word == self.0)
        }
    }

    /// Scores the given word below everything else
    struct Avoid(Word);

    impl Strategy for Avoid {
        fn name(&self) -> &'static str {
            "avoid"
        }

        fn stats_mode(&self) -> StatsMode {
            StatsMode::Aggregate
        }

        fn score(&self, word: &Word, _: &FrequencyStats) -> u64 {
            u64::from(*word != self.0)
        }
    }

    fn toy() -> Vec<Word> {
        words(&["cat", "bat", "rat", "mat"])
    }

    #[test]
    fn new_rejects_bad_config() {
        let list = toy();
        assert_eq!(
            Engine::new(&list, &list, EngineConfig::default()).unwrap_err(),
            EngineError::Config(ConfigError::WordLengthMismatch {
                list: "guess",
                word: "cat".to_string(),
                expected: 5,
                found: 3,
            })
        );
        assert_eq!(
            Engine::new(&list, &[], EngineConfig::new(3, 8)).unwrap_err(),
            EngineError::Config(ConfigError::EmptyWordList { list: "solution" })
        );
        assert_eq!(
            Engine::new(&list, &list, EngineConfig::new(3, 0)).unwrap_err(),
            EngineError::Config(ConfigError::ZeroStepCap)
        );
    }

    #[test]
    fn toy_candidates() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();
        let solution = Word::new("bat").unwrap();
        let guesses = words(&["cat"]);

        assert_eq!(
            guess_statuses(&guesses[0], &solution),
            [Absent, Correct, Correct]
        );
        let texts: Vec<&str> = engine
            .candidates(&guesses, &solution)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["bat", "rat", "mat"]);
    }

    #[test]
    fn next_guess_uses_strategy() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();
        let solution = Word::new("mat").unwrap();

        let guess = engine
            .next_guess(&Prefer(Word::new("rat").unwrap()), &[], &solution)
            .unwrap();
        assert_eq!(guess.text(), "rat");

        // All candidates tie under positional frequency, so the first wins
        let guess = engine
            .next_guess(&PositionalStrategy, &words(&["rat"]), &solution)
            .unwrap();
        assert_eq!(guess.text(), "cat");
    }

    #[test]
    fn next_guess_reports_empty_candidates() {
        let list = words(&["cat", "bat"]);
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();
        let solution = Word::new("dog").unwrap();

        assert_eq!(
            engine.next_guess(&PositionalStrategy, &words(&["cat"]), &solution),
            Err(EngineError::NoCandidates { guesses: 1 })
        );
    }

    #[test]
    fn play_stops_on_solution() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();
        let solution = Word::new("rat").unwrap();

        let outcome = engine.play(&Prefer(solution.clone()), &solution).unwrap();
        assert_eq!(outcome.steps(), 1);
        assert!(outcome.solved());
        assert!(!outcome.lost);
        assert_eq!(outcome.turns[0].candidates, 4);
        assert_eq!(outcome.turns[0].statuses, [Correct; 3]);
    }

    #[test]
    fn play_solved_at_cap_is_a_win() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 4)).unwrap();
        let solution = Word::new("mat").unwrap();

        let outcome = engine.play(&Avoid(solution.clone()), &solution).unwrap();
        let guessed: Vec<&str> = outcome.turns.iter().map(|t| t.guess.text()).collect();
        assert_eq!(guessed, ["cat", "bat", "rat", "mat"]);
        assert!(outcome.solved());
        assert!(!outcome.lost);
    }

    #[test]
    fn play_past_cap_is_a_loss() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 1)).unwrap();
        let solution = Word::new("mat").unwrap();

        let outcome = engine.play(&Avoid(solution.clone()), &solution).unwrap();
        assert_eq!(outcome.steps(), 2);
        assert!(!outcome.solved());
        assert!(outcome.lost);
    }

    #[test]
    fn play_every_strategy_solves_toy() {
        let list = toy();
        let engine = Engine::new(&list, &list, EngineConfig::new(3, 8)).unwrap();

        for strategy in StrategyType::all() {
            for solution in &list {
                let outcome = engine.play(&strategy, solution).unwrap();
                assert!(outcome.solved(), "{} failed on {solution}", strategy.name());
                assert!(outcome.steps() <= list.len());
            }
        }
    }

    #[test]
    fn word_for_day_uses_solution_list() {
        let guesses = toy();
        let solutions = words(&["mat", "rat"]);
        let engine = Engine::new(&guesses, &solutions, EngineConfig::new(3, 8)).unwrap();

        assert_eq!(engine.word_for_day(0).text(), "mat");
        assert_eq!(engine.word_for_day(3).text(), "rat");
        assert_eq!(engine.solution_for_day(2).unwrap().index, 0);
    }
}
