//! Core domain types
//!
//! Letters, words and letter feedback. Everything here is a pure value type;
//! nothing depends on word lists or configuration.

mod letter;
mod status;
mod word;

pub use letter::{Alphabet, AlphabetKind, CharValue, MAX_LETTER_BYTES};
pub use status::{
    AccumulatedStatus, GuessStatuses, LetterStatus, accumulated_status, guess_statuses,
};
pub use word::Word;
