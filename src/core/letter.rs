//! Letters and alphabets
//!
//! A letter is not always one `char`: the Hungarian alphabet has digraphs
//! (`cs`, `gy`, `sz`, ...) and one trigraph (`dzs`) that count as a single
//! tile. [`CharValue`] stores one such unit inline so it stays `Copy` and cheap
//! to hash, and [`Alphabet`] turns raw text into those units.

use crate::error::WordError;
use std::fmt;

/// Longest letter, in UTF-8 bytes, a [`CharValue`] can hold
pub const MAX_LETTER_BYTES: usize = 8;

/// One indivisible letter unit
///
/// Equality, ordering and hashing all operate on the whole unit, so `"cs"` is a
/// single letter distinct from `"c"` followed by `"s"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharValue {
    len: u8,
    bytes: [u8; MAX_LETTER_BYTES],
}

impl CharValue {
    /// Create a letter from its textual form
    ///
    /// The text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError::EmptyLetter` for an empty string and
    /// `WordError::LetterTooLong` if the lowercased text exceeds
    /// [`MAX_LETTER_BYTES`].
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristics::core::CharValue;
    ///
    /// let dzs = CharValue::new("DZS").unwrap();
    /// assert_eq!(dzs.as_str(), "dzs");
    /// assert_ne!(dzs, CharValue::new("d").unwrap());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_lowercase();
        if text.is_empty() {
            return Err(WordError::EmptyLetter);
        }
        if text.len() > MAX_LETTER_BYTES {
            return Err(WordError::LetterTooLong(text));
        }

        let mut bytes = [0u8; MAX_LETTER_BYTES];
        bytes[..text.len()].copy_from_slice(text.as_bytes());

        Ok(Self {
            len: text.len() as u8,
            bytes,
        })
    }

    /// Single-`char` letter
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        let mut buf = [0u8; 4];
        let lower: String = ch.to_lowercase().collect();
        let encoded = if lower.len() <= MAX_LETTER_BYTES {
            lower.as_str()
        } else {
            ch.encode_utf8(&mut buf)
        };

        let mut bytes = [0u8; MAX_LETTER_BYTES];
        bytes[..encoded.len()].copy_from_slice(encoded.as_bytes());
        Self {
            len: encoded.len() as u8,
            bytes,
        }
    }

    /// The letter as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bytes always come from a `&str`, so this never falls back
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Display for CharValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CharValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Supported alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetKind {
    English,
    Hungarian,
}

impl AlphabetKind {
    /// Look up an alphabet by name (`english`/`en`, `hungarian`/`hu`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "hungarian" | "hu" | "magyar" => Some(Self::Hungarian),
            _ => None,
        }
    }
}

const HUNGARIAN_LETTERS: &[&str] = &[
    "a", "á", "b", "c", "cs", "d", "dz", "dzs", "e", "é", "f", "g", "gy", "h", "i", "í", "j", "k",
    "l", "ly", "m", "n", "ny", "o", "ó", "ö", "ő", "p", "q", "r", "s", "sz", "t", "ty", "u", "ú",
    "ü", "ű", "v", "w", "x", "y", "z", "zs",
];

/// The set of letters words are built from, plus a greedy tokenizer
#[derive(Debug, Clone)]
pub struct Alphabet {
    kind: AlphabetKind,
    letters: Vec<CharValue>,
    /// Same letters, longest first, for greedy matching
    by_length: Vec<CharValue>,
}

impl Alphabet {
    /// Build an alphabet of the given kind
    #[must_use]
    pub fn new(kind: AlphabetKind) -> Self {
        let letters: Vec<CharValue> = match kind {
            AlphabetKind::English => ('a'..='z').map(CharValue::from_char).collect(),
            AlphabetKind::Hungarian => HUNGARIAN_LETTERS
                .iter()
                .filter_map(|&s| CharValue::new(s).ok())
                .collect(),
        };

        let mut by_length = letters.clone();
        by_length.sort_by_key(|l| std::cmp::Reverse(l.as_str().len()));

        Self {
            kind,
            letters,
            by_length,
        }
    }

    /// The 26-letter English alphabet
    #[must_use]
    pub fn english() -> Self {
        Self::new(AlphabetKind::English)
    }

    /// The 44-letter Hungarian alphabet, including `cs`, `dz`, `dzs`, `gy`,
    /// `ly`, `ny`, `sz`, `ty` and `zs`
    #[must_use]
    pub fn hungarian() -> Self {
        Self::new(AlphabetKind::Hungarian)
    }

    #[must_use]
    pub const fn kind(&self) -> AlphabetKind {
        self.kind
    }

    /// All letters in alphabetical order
    #[must_use]
    pub fn letters(&self) -> &[CharValue] {
        &self.letters
    }

    #[must_use]
    pub fn contains(&self, letter: CharValue) -> bool {
        self.letters.contains(&letter)
    }

    /// Split text into letters, always taking the longest letter that matches
    ///
    /// Greedy matching reads `csirke` as `cs i r k e`. Words where a digraph's
    /// characters belong to separate letters must be written pre-split (see
    /// [`Alphabet::letters_from_tokens`]).
    ///
    /// # Errors
    /// Returns `WordError::EmptyWord` for blank input and
    /// `WordError::UnknownLetter` when no letter matches at some position.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristics::core::Alphabet;
    ///
    /// let letters = Alphabet::hungarian().tokenize("csirke").unwrap();
    /// let text: Vec<&str> = letters.iter().map(|l| l.as_str()).collect();
    /// assert_eq!(text, ["cs", "i", "r", "k", "e"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Result<Vec<CharValue>, WordError> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return Err(WordError::EmptyWord);
        }

        let mut letters = Vec::with_capacity(text.len());
        let mut rest = text.as_str();

        while !rest.is_empty() {
            let letter = self
                .by_length
                .iter()
                .find(|l| rest.starts_with(l.as_str()))
                .copied()
                .ok_or_else(|| {
                    WordError::UnknownLetter(rest.chars().next().unwrap_or_default().to_string())
                })?;
            rest = &rest[letter.as_str().len()..];
            letters.push(letter);
        }

        Ok(letters)
    }

    /// Convert already-split tokens into letters, checking each one
    ///
    /// # Errors
    /// Returns `WordError::EmptyWord` when there are no tokens and
    /// `WordError::UnknownLetter` for a token outside the alphabet.
    pub fn letters_from_tokens<'t>(
        &self,
        tokens: impl IntoIterator<Item = &'t str>,
    ) -> Result<Vec<CharValue>, WordError> {
        let letters = tokens
            .into_iter()
            .map(|token| {
                let letter = CharValue::new(token)?;
                if self.contains(letter) {
                    Ok(letter)
                } else {
                    Err(WordError::UnknownLetter(token.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if letters.is_empty() {
            return Err(WordError::EmptyWord);
        }
        Ok(letters)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(letters: &[CharValue]) -> Vec<&str> {
        letters.iter().map(CharValue::as_str).collect()
    }

    #[test]
    fn char_value_is_lowercased() {
        assert_eq!(CharValue::new("Sz").unwrap().as_str(), "sz");
        assert_eq!(CharValue::from_char('Q').as_str(), "q");
        assert_eq!(CharValue::from_char('Ő').as_str(), "ő");
    }

    #[test]
    fn char_value_rejects_empty_and_long() {
        assert_eq!(CharValue::new(""), Err(WordError::EmptyLetter));
        assert!(matches!(
            CharValue::new("abcdefghi"),
            Err(WordError::LetterTooLong(_))
        ));
    }

    #[test]
    fn alphabet_remembers_its_kind() {
        let kind = AlphabetKind::from_name("hu").unwrap();
        assert_eq!(Alphabet::new(kind).kind(), AlphabetKind::Hungarian);
        assert_eq!(Alphabet::default().kind(), AlphabetKind::English);
    }

    #[test]
    fn digraph_is_one_unit() {
        let cs = CharValue::new("cs").unwrap();
        assert_eq!(cs.as_str().len(), 2);
        assert_ne!(cs, CharValue::from_char('c'));
        assert_eq!(format!("{cs}"), "cs");
        assert_eq!(format!("{cs:?}"), "\"cs\"");
    }

    #[test]
    fn english_alphabet_has_26_letters() {
        let alphabet = Alphabet::english();
        assert_eq!(alphabet.letters().len(), 26);
        assert!(alphabet.contains(CharValue::from_char('z')));
    }

    #[test]
    fn hungarian_alphabet_has_44_letters() {
        let alphabet = Alphabet::hungarian();
        assert_eq!(alphabet.letters().len(), 44);
        assert!(alphabet.contains(CharValue::new("dzs").unwrap()));
    }

    #[test]
    fn tokenize_english_splits_per_char() {
        let letters = Alphabet::english().tokenize("Crane").unwrap();
        assert_eq!(texts(&letters), ["c", "r", "a", "n", "e"]);
    }

    #[test]
    fn tokenize_hungarian_prefers_longest_letter() {
        let alphabet = Alphabet::hungarian();

        let letters = alphabet.tokenize("csirke").unwrap();
        assert_eq!(texts(&letters), ["cs", "i", "r", "k", "e"]);

        let letters = alphabet.tokenize("bodzsa").unwrap();
        assert_eq!(texts(&letters), ["b", "o", "dzs", "a"]);

        let letters = alphabet.tokenize("hőség").unwrap();
        assert_eq!(texts(&letters), ["h", "ő", "s", "é", "g"]);
    }

    #[test]
    fn tokenize_rejects_unknown_letters() {
        assert_eq!(
            Alphabet::english().tokenize("cr4ne"),
            Err(WordError::UnknownLetter("4".to_string()))
        );
        assert_eq!(Alphabet::english().tokenize("   "), Err(WordError::EmptyWord));
    }

    #[test]
    fn letters_from_tokens_keeps_split() {
        let alphabet = Alphabet::hungarian();
        let letters = alphabet
            .letters_from_tokens(["c", "s", "ő", "r", "e"])
            .unwrap();
        assert_eq!(texts(&letters), ["c", "s", "ő", "r", "e"]);

        assert!(matches!(
            alphabet.letters_from_tokens(["c", "ch"]),
            Err(WordError::UnknownLetter(_))
        ));
    }

    #[test]
    fn alphabet_kind_from_name() {
        assert_eq!(AlphabetKind::from_name("HU"), Some(AlphabetKind::Hungarian));
        assert_eq!(AlphabetKind::from_name("english"), Some(AlphabetKind::English));
        assert_eq!(AlphabetKind::from_name("klingon"), None);
    }
}
