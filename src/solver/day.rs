//! Day-index resolution
//!
//! Maps a day offset from the game epoch to an entry of the solution list.
//! The mapping is a pure function of the offset and the list length, so
//! simulations pick the same solutions on every run.

use crate::core::Word;

/// Game epoch, 2022-01-01T00:00:00Z, in Unix milliseconds
pub const EPOCH_MS: i64 = 1_640_995_200_000;

/// Milliseconds in one day
pub const ONE_DAY_MS: i64 = 86_400_000;

/// The solution of one day together with its position in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySolution<'a> {
    pub word: &'a Word,
    /// Index into the solution list
    pub index: usize,
    /// Unix milliseconds at which the following day starts
    pub next_day_ms: i64,
}

/// Days elapsed since the epoch for the instant `offset` days after it
fn days_since_epoch(offset: i64) -> i128 {
    let epoch = i128::from(EPOCH_MS);
    let day = i128::from(ONE_DAY_MS);
    let now = epoch + i128::from(offset) * day;
    (now - epoch).div_euclid(day)
}

/// List index for a day offset, or `None` for an empty list
///
/// Negative offsets wrap around the end of the list.
#[must_use]
pub fn day_index(offset: i64, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let index = days_since_epoch(offset).rem_euclid(list_len as i128);
    usize::try_from(index).ok()
}

/// The solution for a day offset
///
/// Returns `None` only for an empty list.
///
/// # Examples
/// ```
/// use wordle_heuristics::core::Word;
/// use wordle_heuristics::solver::day::word_for_day;
///
/// let list: Vec<Word> = ["cat", "bat", "rat"].iter().map(|w| Word::new(w).unwrap()).collect();
/// assert_eq!(word_for_day(1, &list).unwrap().text(), "bat");
/// assert_eq!(word_for_day(4, &list), word_for_day(1, &list));
/// ```
#[must_use]
pub fn word_for_day(offset: i64, list: &[Word]) -> Option<&Word> {
    day_index(offset, list.len()).and_then(|i| list.get(i))
}

/// The solution for a day offset plus its index and the next day's start
#[must_use]
pub fn solution_for_day(offset: i64, list: &[Word]) -> Option<DaySolution<'_>> {
    let index = day_index(offset, list.len())?;
    let days = days_since_epoch(offset);
    let next_day = (days + 1) * i128::from(ONE_DAY_MS) + i128::from(EPOCH_MS);

    Some(DaySolution {
        word: list.get(index)?,
        index,
        next_day_ms: i64::try_from(next_day).unwrap_or(i64::MAX),
    })
}

/// Which day offset a Unix-millisecond instant falls on
#[must_use]
pub const fn day_offset_at(unix_ms: i64) -> i64 {
    (unix_ms - EPOCH_MS).div_euclid(ONE_DAY_MS)
}
