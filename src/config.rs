//! Engine configuration
//!
//! Word length and step cap, plus validation of the word lists against them.

use crate::core::Word;
use crate::error::ConfigError;

/// Letters per word in the reference game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses a simulated game may take before it counts as lost
pub const DEFAULT_MAX_STEPS: usize = 8;

/// Settings shared by filtering, scoring and simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Every guess and solution must have exactly this many letters
    pub word_length: usize,
    /// A game that needs more guesses than this is a loss
    pub max_steps: usize,
}

impl EngineConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_steps: usize) -> Self {
        Self {
            word_length,
            max_steps,
        }
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Check the settings themselves
    ///
    /// # Errors
    /// Returns `ConfigError` if the word length or step cap is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepCap);
        }
        Ok(())
    }

    /// Check a word list against the configured word length
    ///
    /// `list` names the list in error messages.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` for an empty list and
    /// `ConfigError::WordLengthMismatch` for the first word of the wrong length.
    pub fn validate_words(&self, list: &'static str, words: &[Word]) -> Result<(), ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList { list });
        }

        match words.iter().find(|w| w.len() != self.word_length) {
            Some(word) => Err(ConfigError::WordLengthMismatch {
                list,
                word: word.text().to_string(),
                expected: self.word_length,
                found: word.len(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_STEPS)
    }
}
