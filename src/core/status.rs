//! Letter feedback
//!
//! Each guessed letter is `Correct` (right letter, right place), `Present`
//! (in the solution somewhere else) or `Absent`. Statuses are ordered by how
//! much they tell us, `Absent < Present < Correct`, and accumulated knowledge
//! about a letter only ever moves up that order.

use super::letter::CharValue;
use super::word::Word;
use rustc_hash::FxHashMap;

/// Feedback for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Not in the solution (or every copy is already accounted for)
    Absent,
    /// In the solution at a different position
    Present,
    /// In the solution at this position
    Correct,
}

impl LetterStatus {
    /// Merge two observations, keeping the more informative one
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// One-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Per-position statuses for a single guess
pub type GuessStatuses = Vec<LetterStatus>;

/// Best known status per letter across a whole guess history
pub type AccumulatedStatus = FxHashMap<CharValue, LetterStatus>;

/// Calculate the feedback for `guess` against `solution`
///
/// Handles duplicate letters the way the game does.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume that solution slot
/// 2. Second pass: for each remaining position, mark `Present` if an
///    unconsumed copy of the letter is left in the solution (consuming it),
///    otherwise `Absent`
///
/// Both words are expected to have the same length; extra positions of the
/// longer word are ignored.
///
/// # Examples
/// ```
/// use wordle_heuristics::core::{guess_statuses, LetterStatus::*, Word};
///
/// let guess = Word::new("aac").unwrap();
/// let solution = Word::new("aba").unwrap();
///
/// // The second A takes the one unconsumed A; C is absent.
/// assert_eq!(guess_statuses(&guess, &solution), [Correct, Present, Absent]);
/// ```
#[must_use]
pub fn guess_statuses(guess: &Word, solution: &Word) -> GuessStatuses {
    let len = guess.len().min(solution.len());
    let mut statuses: Vec<Option<LetterStatus>> = vec![None; len];
    let mut consumed = vec![false; solution.len()];

    // First pass: exact matches
    // Allow: Index needed to compare both words and mark both arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if guess.letter_at(i) == solution.letter_at(i) {
            statuses[i] = Some(LetterStatus::Correct);
            consumed[i] = true;
        }
    }

    // Second pass: misplaced letters take the first unconsumed copy
    for (i, status) in statuses.iter_mut().enumerate() {
        if status.is_some() {
            continue;
        }

        let letter = guess.letter_at(i);
        let free_slot = solution.positions_of(letter).find(|&j| !consumed[j]);

        *status = Some(match free_slot {
            Some(j) => {
                consumed[j] = true;
                LetterStatus::Present
            }
            None => LetterStatus::Absent,
        });
    }

    statuses
        .into_iter()
        .map(|s| s.unwrap_or(LetterStatus::Absent))
        .collect()
}

/// Fold the feedback of every guess into one status per letter
///
/// A letter keeps the most informative status it has ever shown, so once it
/// has been `Correct` anywhere a later misplaced copy does not downgrade it.
///
/// # Examples
/// ```
/// use wordle_heuristics::core::{accumulated_status, LetterStatus, Word};
///
/// let solution = Word::new("bat").unwrap();
/// let guesses = [Word::new("tab").unwrap(), Word::new("cat").unwrap()];
/// let status = accumulated_status(&guesses, &solution);
///
/// let t = Word::new("t").unwrap().letter_at(0);
/// assert_eq!(status[&t], LetterStatus::Correct);
/// ```
#[must_use]
pub fn accumulated_status(guesses: &[Word], solution: &Word) -> AccumulatedStatus {
    let mut accumulated = AccumulatedStatus::default();

    for guess in guesses {
        let statuses = guess_statuses(guess, solution);
        for (&letter, &status) in guess.letters().iter().zip(&statuses) {
            accumulated
                .entry(letter)
                .and_modify(|known| *known = known.merge(status))
                .or_insert(status);
        }
    }

    accumulated
}
