//! Wordle word representation
//!
//! A `Word` is a non-empty sequence of lowercase ASCII letters. Its length is
//! not fixed by the type; a session decides its `n_letters` and filters words
//! to match.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase word used as a guess, a hidden word or a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    ///
    /// let word = Word::new("Ratio").unwrap();
    /// assert_eq!(word.text(), "ratio");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r4tio").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Multiset of the word's letters
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ratio").unwrap();
        assert_eq!(word.text(), "ratio");
        assert_eq!(word.letters(), b"ratio");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("  CrAnE\n").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("at").unwrap().len(), 2);
        assert_eq!(Word::new("pizzazz").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("café!"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_at(0), b's');
        assert_eq!(word.letter_at(4), b'd');
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Route".parse().unwrap();
        assert_eq!(format!("{word}"), "route");
    }
}
