//! Candidate filtering
//!
//! Narrows a master word list to the words still consistent with every guess
//! made so far against a known solution.

use crate::core::{
    AccumulatedStatus, GuessStatuses, LetterStatus, Word, accumulated_status, guess_statuses,
};

/// Constraints derived from one guess history
///
/// Per-guess statuses and the accumulated per-letter status are computed once
/// up front, so checking a word only compares letters.
pub struct CandidateFilter<'g> {
    guesses: &'g [Word],
    per_guess: Vec<GuessStatuses>,
    accumulated: AccumulatedStatus,
}

impl<'g> CandidateFilter<'g> {
    /// Derive the constraints for `guesses` played against `solution`
    #[must_use]
    pub fn new(guesses: &'g [Word], solution: &Word) -> Self {
        let per_guess = guesses
            .iter()
            .map(|guess| guess_statuses(guess, solution))
            .collect();

        Self {
            guesses,
            per_guess,
            accumulated: accumulated_status(guesses, solution),
        }
    }

    /// The merged per-letter status the filter works from
    #[must_use]
    pub const fn accumulated(&self) -> &AccumulatedStatus {
        &self.accumulated
    }

    /// Check whether `word` could still be the solution
    ///
    /// A word survives if:
    /// - it has as many letters as every guess
    /// - it has not been guessed already
    /// - it has no letter whose merged status is `Absent`
    /// - it has every letter whose merged status is `Present`
    /// - it repeats every `Correct` letter in place and never puts a `Present`
    ///   letter back where it was shown
    ///
    /// The absent-letter rule reads the merged status, not each guess's own
    /// `Absent` marks: a duplicate copy shown `Absent` must not rule out words
    /// that contain the letter once.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.guesses.iter().any(|g| g.len() != word.len()) || self.guesses.contains(word) {
            return false;
        }

        if word
            .letters()
            .iter()
            .any(|l| self.accumulated.get(l) == Some(&LetterStatus::Absent))
        {
            return false;
        }

        let missing_present = self
            .accumulated
            .iter()
            .any(|(&l, &status)| status == LetterStatus::Present && !word.has_letter(l));
        if missing_present {
            return false;
        }

        self.guesses
            .iter()
            .zip(&self.per_guess)
            .all(|(guess, statuses)| {
                statuses.iter().enumerate().all(|(i, status)| {
                    let same = guess.letter_at(i) == word.letter_at(i);
                    match status {
                        LetterStatus::Correct => same,
                        LetterStatus::Present => !same,
                        LetterStatus::Absent => true,
                    }
                })
            })
    }

    /// Keep the words of `master` that still match, in master-list order
    #[must_use]
    pub fn apply<'a>(&self, master: &'a [Word]) -> Vec<&'a Word> {
        master.iter().filter(|w| self.matches(w)).collect()
    }
}

/// Filter the master list to the candidates consistent with the guess history
///
/// # Examples
/// ```
/// use wordle_heuristics::core::Word;
/// use wordle_heuristics::solver::filter_candidates;
///
/// let master: Vec<Word> = ["cat", "bat", "rat", "mat"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let solution = Word::new("bat").unwrap();
/// let guesses = [Word::new("cat").unwrap()];
///
/// let candidates = filter_candidates(&master, &guesses, &solution);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["bat", "rat", "mat"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    master: &'a [Word],
    guesses: &[Word],
    solution: &Word,
) -> Vec<&'a Word> {
    CandidateFilter::new(guesses, solution).apply(master)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts<'a>(candidates: &[&'a Word]) -> Vec<&'a str> {
        candidates.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let master = words(&["cat", "bat", "rat"]);
        let solution = Word::new("bat").unwrap();
        assert_eq!(filter_candidates(&master, &[], &solution).len(), 3);
    }

    #[test]
    fn toy_scenario() {
        let master = words(&["cat", "bat", "rat", "mat"]);
        let solution = Word::new("bat").unwrap();
        let guesses = words(&["cat"]);

        let filter = CandidateFilter::new(&guesses, &solution);
        assert_eq!(
            filter.accumulated()[&Word::new("c").unwrap().letter_at(0)],
            LetterStatus::Absent
        );
        assert_eq!(texts(&filter.apply(&master)), ["bat", "rat", "mat"]);
    }

    #[test]
    fn absent_letters_excluded() {
        let master = words(&["crane", "slate", "irate", "grate"]);
        let solution = Word::new("grate").unwrap();
        // C and N are absent
        let guesses = words(&["crane"]);
        assert_eq!(
            texts(&filter_candidates(&master, &guesses, &solution)),
            ["irate", "grate"]
        );
    }

    #[test]
    fn present_letter_required_and_moved() {
        let master = words(&["robin", "orbit", "bison", "sober"]);
        let solution = Word::new("orbit").unwrap();
        let guesses = words(&["bison"]);
        // B, I and O are present but misplaced; S and N are absent
        let candidates = filter_candidates(&master, &guesses, &solution);
        assert_eq!(texts(&candidates), ["orbit"]);
    }

    #[test]
    fn present_letter_not_allowed_back_in_same_spot() {
        let master = words(&["abc", "bac", "bca", "cab"]);
        let solution = Word::new("bca").unwrap();
        // A present at 0, B present at 1, C present at 2
        let guesses = words(&["abc"]);
        assert_eq!(
            texts(&filter_candidates(&master, &guesses, &solution)),
            ["bca", "cab"]
        );
    }

    #[test]
    fn duplicate_absent_mark_does_not_exclude_letter() {
        // TEETH vs ABIDE: one E present, the other E absent
        let master = words(&["abide", "eerie", "shade"]);
        let solution = Word::new("abide").unwrap();
        let guesses = words(&["teeth"]);
        let candidates = filter_candidates(&master, &guesses, &solution);
        assert!(candidates.iter().any(|w| w.text() == "abide"));
    }

    #[test]
    fn filtering_never_grows() {
        let master = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "react", "cater",
        ]);
        let solution = Word::new("grate").unwrap();
        let mut guesses = Vec::new();
        let mut previous = filter_candidates(&master, &guesses, &solution).len();

        for guess in ["trace", "crate", "irate"] {
            guesses.push(Word::new(guess).unwrap());
            let now = filter_candidates(&master, &guesses, &solution).len();
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn solution_stays_candidate_until_guessed() {
        let master = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let solution = Word::new("crate").unwrap();
        let mut guesses = Vec::new();

        for guess in ["slate", "irate", "grate", "trace"] {
            guesses.push(Word::new(guess).unwrap());
            let candidates = filter_candidates(&master, &guesses, &solution);
            assert!(candidates.contains(&&solution));
        }

        guesses.push(solution.clone());
        assert!(!filter_candidates(&master, &guesses, &solution).contains(&&solution));
    }

    #[test]
    fn words_of_other_lengths_are_skipped() {
        let master = words(&["ca", "cat", "cart", "bat"]);
        let guesses = words(&["cat"]);
        let solution = Word::new("bat").unwrap();

        let kept: Vec<&str> = filter_candidates(&master, &guesses, &solution)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(kept, ["bat"]);
    }
}
