//! Word list loading utilities
//!
//! Turns list text into words at the loading boundary. Digraph alphabets are
//! resolved here so the engine only ever sees tokenized letters.

use crate::core::{Alphabet, Word};
use crate::error::{LoadError, WordError};
use std::fs;
use std::path::Path;

/// Parse one line of a word list
///
/// Returns `None` for blank lines and `#` comments. A line containing
/// whitespace holds pre-split letters; anything else is tokenized greedily.
fn parse_line(line: &str, alphabet: &Alphabet) -> Option<Result<Word, WordError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let word = if line.contains(char::is_whitespace) {
        alphabet
            .letters_from_tokens(line.split_whitespace())
            .and_then(Word::from_letters)
    } else {
        Word::parse(line, alphabet)
    };
    Some(word)
}

/// Parse word list text
///
/// # Errors
/// Returns `LoadError::Word` with the 1-based line number of the first line
/// that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_heuristics::core::Alphabet;
/// use wordle_heuristics::wordlists::loader::parse_words;
///
/// let text = "# Hungarian\ncsirke\n\ncs i g a\n";
/// let words = parse_words(text, &Alphabet::hungarian()).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].len(), 4);
/// ```
pub fn parse_words(content: &str, alphabet: &Alphabet) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_line(line, alphabet)
                .map(|word| word.map_err(|source| LoadError::Word { line: i + 1, source }))
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Word`
/// for the first line that does not parse.
///
/// # Examples
/// ```no_run
/// use wordle_heuristics::core::Alphabet;
/// use wordle_heuristics::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", &Alphabet::english()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, alphabet)?;
    tracing::debug!(
        path = %path.display(),
        alphabet = ?alphabet.kind(),
        words = words.len(),
        "word list loaded"
    );
    Ok(words)
}

/// Convert an embedded string slice to words, one `char` per letter
///
/// # Errors
/// Returns the first `WordError` encountered.
///
/// # Examples
/// ```
/// use wordle_heuristics::wordlists::loader::words_from_slice;
/// use wordle_heuristics::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS).unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordError> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
