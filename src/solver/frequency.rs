//! Letter frequency statistics over a candidate set

use crate::core::{CharValue, Word};
use rustc_hash::FxHashMap;

/// Which shape of statistics a strategy scores against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMode {
    /// One total per letter
    Aggregate,
    /// One count per letter per position
    Positional,
}

/// Letter counts across a candidate set
///
/// Letters that never occur have no entry and count as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyStats {
    /// Total occurrences of each letter (repeats within a word all count)
    Aggregate(FxHashMap<CharValue, u32>),
    /// For each letter, how many candidates have it at each position
    Positional(FxHashMap<CharValue, Vec<u32>>),
}

impl FrequencyStats {
    /// Count candidate letters in the requested shape
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristics::core::Word;
    /// use wordle_heuristics::solver::{FrequencyStats, StatsMode};
    ///
    /// let words = [Word::new("eel").unwrap(), Word::new("lee").unwrap()];
    /// let refs: Vec<&Word> = words.iter().collect();
    /// let e = words[0].letter_at(0);
    ///
    /// let stats = FrequencyStats::build(&refs, StatsMode::Aggregate, 3);
    /// assert_eq!(stats.count(e), 4);
    ///
    /// let stats = FrequencyStats::build(&refs, StatsMode::Positional, 3);
    /// assert_eq!(stats.count_at(e, 0), 1);
    /// assert_eq!(stats.count_at(e, 1), 2);
    /// ```
    #[must_use]
    pub fn build(candidates: &[&Word], mode: StatsMode, word_length: usize) -> Self {
        match mode {
            StatsMode::Aggregate => {
                let mut counts: FxHashMap<CharValue, u32> = FxHashMap::default();
                for word in candidates {
                    for &letter in word.letters() {
                        *counts.entry(letter).or_insert(0) += 1;
                    }
                }
                Self::Aggregate(counts)
            }
            StatsMode::Positional => {
                let mut counts: FxHashMap<CharValue, Vec<u32>> = FxHashMap::default();
                for word in candidates {
                    for (i, &letter) in word.letters().iter().enumerate().take(word_length) {
                        counts.entry(letter).or_insert_with(|| vec![0; word_length])[i] += 1;
                    }
                }
                Self::Positional(counts)
            }
        }
    }

    #[must_use]
    pub const fn mode(&self) -> StatsMode {
        match self {
            Self::Aggregate(_) => StatsMode::Aggregate,
            Self::Positional(_) => StatsMode::Positional,
        }
    }

    /// Total occurrences of `letter`
    ///
    /// Positional stats report the sum over all positions.
    #[must_use]
    pub fn count(&self, letter: CharValue) -> u32 {
        match self {
            Self::Aggregate(counts) => counts.get(&letter).copied().unwrap_or(0),
            Self::Positional(counts) => counts.get(&letter).map_or(0, |c| c.iter().sum()),
        }
    }

    /// Occurrences of `letter` at `position`
    ///
    /// Aggregate stats carry no positional information and report 0.
    #[must_use]
    pub fn count_at(&self, letter: CharValue, position: usize) -> u32 {
        match self {
            Self::Aggregate(_) => 0,
            Self::Positional(counts) => counts
                .get(&letter)
                .and_then(|c| c.get(position))
                .copied()
                .unwrap_or(0),
        }
    }
}

/// Build frequency stats, aggregate or per position
#[must_use]
pub fn build_stats(
    candidates: &[&Word],
    per_position: bool,
    word_length: usize,
) -> FrequencyStats {
    let mode = if per_position {
        StatsMode::Positional
    } else {
        StatsMode::Aggregate
    };
    FrequencyStats::build(candidates, mode, word_length)
}
