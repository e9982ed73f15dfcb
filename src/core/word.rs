//! Word representation
//!
//! A Word is an ordered sequence of [`CharValue`] letters plus its display text.
//! Length is counted in letters, so a Hungarian word like `csirke` is five
//! letters long.

use super::letter::{Alphabet, CharValue};
use crate::error::WordError;
use std::fmt;

/// A guessable word
///
/// The length is not fixed here; the engine checks every word against its
/// configured word length when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<CharValue>,
}

impl Word {
    /// Create a word where every `char` is one letter
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristics::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let letters = text
            .chars()
            .map(|ch| {
                if ch.is_alphabetic() {
                    Ok(CharValue::from_char(ch))
                } else {
                    Err(WordError::UnknownLetter(ch.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_letters(letters)
    }

    /// Create a word by tokenizing text with an alphabet
    ///
    /// # Errors
    /// Returns the tokenizer's `WordError` for empty text or unknown letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristics::core::{Alphabet, Word};
    ///
    /// let word = Word::parse("csirke", &Alphabet::hungarian()).unwrap();
    /// assert_eq!(word.len(), 5);
    /// assert_eq!(word.letter_at(0).as_str(), "cs");
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, WordError> {
        Self::from_letters(alphabet.tokenize(text)?)
    }

    /// Create a word from pre-tokenized letters
    ///
    /// # Errors
    /// Returns `WordError::EmptyWord` if `letters` is empty.
    pub fn from_letters(letters: Vec<CharValue>) -> Result<Self, WordError> {
        if letters.is_empty() {
            return Err(WordError::EmptyWord);
        }

        let text = letters.iter().map(CharValue::as_str).collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[CharValue] {
        &self.letters
    }

    /// Length in letters, not bytes or chars
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> CharValue {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: CharValue) -> bool {
        self.letters.contains(&letter)
    }

    /// All positions where a letter appears
    pub fn positions_of(&self, letter: CharValue) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == letter)
            .map(|(i, _)| i)
    }

    /// Letters with duplicates removed, in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<CharValue> {
        let mut distinct = Vec::with_capacity(self.letters.len());
        for &letter in &self.letters {
            if !distinct.contains(&letter) {
                distinct.push(letter);
            }
        }
        distinct
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
