//! Guess selection strategies
//!
//! Defines the Strategy trait and the three letter-frequency heuristics.

use super::frequency::{FrequencyStats, StatsMode};
use crate::core::Word;
use rayon::prelude::*;

/// A heuristic that scores candidates against letter statistics
///
/// Implementors only define how a single word scores; [`Strategy::select_guess`]
/// picks the highest scoring candidate.
pub trait Strategy: Sync {
    /// Short identifier, also accepted by [`StrategyType::from_name`]
    fn name(&self) -> &'static str;

    /// The shape of statistics [`Strategy::score`] reads
    fn stats_mode(&self) -> StatsMode;

    /// Score one candidate; higher is better
    fn score(&self, word: &Word, stats: &FrequencyStats) -> u64;

    /// Select the best candidate
    ///
    /// Ties go to the candidate that comes first in `candidates`, so the same
    /// input always yields the same word. Returns `None` if `candidates` is
    /// empty.
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        stats: &FrequencyStats,
    ) -> Option<&'a Word> {
        select_best_guess(candidates, |word| self.score(word, stats))
    }
}

/// Pick the highest scoring word, earliest wins on ties
///
/// Scores are computed in parallel; the index tie-break keeps the result
/// identical to a sequential first-maximum scan.
pub fn select_best_guess<'a, F>(candidates: &[&'a Word], score: F) -> Option<&'a Word>
where
    F: Fn(&Word) -> u64 + Sync,
{
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, &word)| (score(word), index, word))
        .max_by(|(s1, i1, _), (s2, i2, _)| s1.cmp(s2).then_with(|| i2.cmp(i1)))
        .map(|(_, _, word)| word)
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Frequency of each distinct letter
    Distinct(DistinctLetterStrategy),
    /// Frequency of each letter at its position
    Positional(PositionalStrategy),
    /// Frequency of every letter occurrence
    Occurrences(OccurrenceStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Distinct(s) => s.name(),
            Self::Positional(s) => s.name(),
            Self::Occurrences(s) => s.name(),
        }
    }

    fn stats_mode(&self) -> StatsMode {
        match self {
            Self::Distinct(s) => s.stats_mode(),
            Self::Positional(s) => s.stats_mode(),
            Self::Occurrences(s) => s.stats_mode(),
        }
    }

    fn score(&self, word: &Word, stats: &FrequencyStats) -> u64 {
        match self {
            Self::Distinct(s) => s.score(word, stats),
            Self::Positional(s) => s.score(word, stats),
            Self::Occurrences(s) => s.score(word, stats),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "distinct" (or "yellowest"), "positional" (or
    /// "greenest"), "occurrences" (or "naive"). Returns `None` for anything
    /// else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "distinct" | "yellowest" => Some(Self::Distinct(DistinctLetterStrategy)),
            "positional" | "greenest" => Some(Self::Positional(PositionalStrategy)),
            "occurrences" | "naive" => Some(Self::Occurrences(OccurrenceStrategy)),
            _ => None,
        }
    }

    /// Every strategy, in reporting order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::Distinct(DistinctLetterStrategy),
            Self::Positional(PositionalStrategy),
            Self::Occurrences(OccurrenceStrategy),
        ]
    }

    /// One-line description for reports
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Distinct(_) => "letter frequency, repeated letters counted once",
            Self::Positional(_) => "letter frequency at each position",
            Self::Occurrences(_) => "letter frequency, every occurrence counted",
        }
    }
}

/// Sums the frequency of each distinct letter
///
/// Repeats add nothing, which favours words that probe five different letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistinctLetterStrategy;

impl Strategy for DistinctLetterStrategy {
    fn name(&self) -> &'static str {
        "distinct"
    }

    fn stats_mode(&self) -> StatsMode {
        StatsMode::Aggregate
    }

    fn score(&self, word: &Word, stats: &FrequencyStats) -> u64 {
        word.distinct_letters()
            .into_iter()
            .map(|letter| u64::from(stats.count(letter)))
            .sum()
    }
}

/// Sums, per position, how many candidates share the letter at that position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionalStrategy;

impl Strategy for PositionalStrategy {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn stats_mode(&self) -> StatsMode {
        StatsMode::Positional
    }

    fn score(&self, word: &Word, stats: &FrequencyStats) -> u64 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| u64::from(stats.count_at(letter, i)))
            .sum()
    }
}

/// Sums the frequency of every letter, repeats included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccurrenceStrategy;

impl Strategy for OccurrenceStrategy {
    fn name(&self) -> &'static str {
        "occurrences"
    }

    fn stats_mode(&self) -> StatsMode {
        StatsMode::Aggregate
    }

    fn score(&self, word: &Word, stats: &FrequencyStats) -> u64 {
        word.letters()
            .iter()
            .map(|&letter| u64::from(stats.count(letter)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn pick(strategy: &impl Strategy, list: &[Word]) -> String {
        let refs: Vec<&Word> = list.iter().collect();
        let stats = FrequencyStats::build(&refs, strategy.stats_mode(), list[0].len());
        strategy
            .select_guess(&refs, &stats)
            .unwrap()
            .text()
            .to_string()
    }

    #[test]
    fn distinct_ignores_repeats() {
        // E appears 7 times; EERIE counts it once when distinct, three times otherwise
        let list = words(&["eerie", "seeds", "sense"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = FrequencyStats::build(&refs, StatsMode::Aggregate, 5);

        let distinct = DistinctLetterStrategy;
        let occurrences = OccurrenceStrategy;
        let e = stats.count(list[0].letter_at(0));

        assert_eq!(e, 7);
        assert!(distinct.score(&list[0], &stats) < occurrences.score(&list[0], &stats));
    }

    #[test]
    fn occurrences_rewards_repeats() {
        // E appears 4 times and S 3 times; SENSE repeats both
        let list = words(&["slate", "sense", "crane"]);
        assert_eq!(pick(&OccurrenceStrategy, &list), "sense");
    }

    #[test]
    fn distinct_prefers_varied_letters() {
        let list = words(&["slate", "sense", "crane"]);
        assert_eq!(pick(&DistinctLetterStrategy, &list), "slate");
    }

    #[test]
    fn positional_matches_slots() {
        // CRATE shares the most letters in place with the rest
        let list = words(&["crate", "grate", "slate", "crane"]);
        assert_eq!(pick(&PositionalStrategy, &list), "crate");
    }

    #[test]
    fn ties_go_to_first_candidate() {
        // Anagrams score the same under both aggregate strategies
        let list = words(&["stare", "tears", "rates", "aster"]);
        assert_eq!(pick(&DistinctLetterStrategy, &list), "stare");
        assert_eq!(pick(&OccurrenceStrategy, &list), "stare");

        let reversed: Vec<Word> = list.iter().rev().cloned().collect();
        assert_eq!(pick(&DistinctLetterStrategy, &reversed), "aster");
    }

    #[test]
    fn selection_is_deterministic() {
        let list = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        for strategy in StrategyType::all() {
            let first = pick(&strategy, &list);
            for _ in 0..5 {
                assert_eq!(pick(&strategy, &list), first);
            }
        }
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let stats = FrequencyStats::build(&[], StatsMode::Aggregate, 5);
        assert!(DistinctLetterStrategy.select_guess(&[], &stats).is_none());
    }

    #[test]
    fn positional_score_reads_slots() {
        let list = words(&["cat", "bat", "tab"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = FrequencyStats::build(&refs, StatsMode::Positional, 3);
        // b at 0: 1, a at 1: 3, t at 2: 2
        assert_eq!(PositionalStrategy.score(&list[1], &stats), 6);
        // t at 0: 1, a at 1: 3, b at 2: 1
        assert_eq!(PositionalStrategy.score(&list[2], &stats), 5);
    }

    #[test]
    fn strategy_type_from_name() {
        assert_eq!(
            StrategyType::from_name("positional"),
            Some(StrategyType::Positional(PositionalStrategy))
        );
        assert_eq!(
            StrategyType::from_name("Yellowest"),
            Some(StrategyType::Distinct(DistinctLetterStrategy))
        );
        assert_eq!(
            StrategyType::from_name("naive"),
            Some(StrategyType::Occurrences(OccurrenceStrategy))
        );
        assert_eq!(StrategyType::from_name("entropy"), None);
    }

    #[test]
    fn strategy_type_delegates() {
        let names: Vec<&str> = StrategyType::all().iter().map(Strategy::name).collect();
        assert_eq!(names, ["distinct", "positional", "occurrences"]);

        let modes: Vec<StatsMode> = StrategyType::all()
            .iter()
            .map(Strategy::stats_mode)
            .collect();
        assert_eq!(
            modes,
            [StatsMode::Aggregate, StatsMode::Positional, StatsMode::Aggregate]
        );
    }
}
