//! Error types
//!
//! Word construction, word list loading, configuration validation and engine
//! evaluation each get their own enum. Losing a simulated game is an outcome,
//! not an error.

/// Errors from building letters or words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    EmptyWord,

    #[error("Letter must not be empty")]
    EmptyLetter,

    #[error("Letter '{0}' is longer than a single tile can hold")]
    LetterTooLong(String),

    #[error("'{0}' is not a letter of the alphabet")]
    UnknownLetter(String),
}

/// Errors from reading a word list file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    Word {
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Invalid engine configuration, reported before any filtering or simulation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Word length must be at least 1")]
    ZeroWordLength,

    #[error("Step cap must be at least 1")]
    ZeroStepCap,

    #[error("The {list} word list is empty")]
    EmptyWordList { list: &'static str },

    #[error("Word '{word}' in the {list} word list has {found} letters, expected {expected}")]
    WordLengthMismatch {
        list: &'static str,
        word: String,
        expected: usize,
        found: usize,
    },
}

/// Errors from evaluating the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("No candidates remain after {guesses} guesses; the guess history contradicts itself")]
    NoCandidates { guesses: usize },

    #[error("Unknown strategy '{0}'")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_engine_error() {
        let err: EngineError = ConfigError::ZeroStepCap.into();
        assert_eq!(err, EngineError::Config(ConfigError::ZeroStepCap));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Step cap must be at least 1"
        );
    }

    #[test]
    fn length_mismatch_names_the_word() {
        let err = ConfigError::WordLengthMismatch {
            list: "guess",
            word: "toolong".to_string(),
            expected: 5,
            found: 7,
        };
        assert_eq!(
            err.to_string(),
            "Word 'toolong' in the guess word list has 7 letters, expected 5"
        );
    }

    #[test]
    fn load_error_reports_line() {
        let err = LoadError::Word {
            line: 3,
            source: WordError::UnknownLetter("4".to_string()),
        };
        assert_eq!(err.to_string(), "Line 3: '4' is not a letter of the alphabet");
        assert!(std::error::Error::source(&err).is_some());
    }
}
