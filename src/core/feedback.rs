//! Wordle feedback marks and scoring
//!
//! Feedback is one mark per letter position:
//! - `G` = Exact (right letter, right position)
//! - `Y` = Present (letter in the word, wrong position)
//! - `K` = Absent (no unclaimed occurrence of the letter)
//!
//! The `G`/`Y`/`K` text form is the wire format between the scorer, the
//! engine and whoever plays the live game; it round-trips through
//! `Display` and `FromStr`.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter in the right position (green)
    Exact,
    /// Letter occurs elsewhere in the hidden word (yellow)
    Present,
    /// Letter has no unclaimed occurrence in the hidden word (black)
    Absent,
}

impl Mark {
    /// Canonical single-character symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'K',
        }
    }

    /// Emoji block used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a single symbol
    ///
    /// Accepts `G`/`Y`/`K` in either case, `-`, `_` and `.` for absent, and
    /// the emoji blocks.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'K' | 'k' | '-' | '_' | '.' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for scoring and parsing feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid feedback symbol {0:?} (use G, Y or K)")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Score `guess` against `hidden`
    ///
    /// Same as [`score`].
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    pub fn score(hidden: &Word, guess: &Word) -> Result<Self, FeedbackError> {
        score(hidden, guess)
    }

    /// The marks, left to right
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying a given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as emoji blocks, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|ch| Mark::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Score `guess` against the `hidden` word
///
/// Two passes over the guess. The first marks exact matches and removes
/// those letters from the pool of unclaimed hidden letters. The second walks
/// the remaining positions left to right, marking a letter `Present` while
/// the pool still holds an unclaimed occurrence and `Absent` otherwise. A
/// repeated guess letter can therefore never claim one hidden occurrence
/// twice.
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::{Word, score};
///
/// let hidden = Word::new("ratio").unwrap();
/// let guess = Word::new("route").unwrap();
/// assert_eq!(score(&hidden, &guess).unwrap().to_string(), "GYKYK");
/// ```
pub fn score(hidden: &Word, guess: &Word) -> Result<Feedback, FeedbackError> {
    if hidden.len() != guess.len() {
        return Err(FeedbackError::LengthMismatch {
            expected: hidden.len(),
            actual: guess.len(),
        });
    }

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut unclaimed = hidden.letter_counts();

    for (i, (&g, &h)) in guess.letters().iter().zip(hidden.letters()).enumerate() {
        if g == h {
            marks[i] = Mark::Exact;
            if let Some(count) = unclaimed.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(&g) {
            if *count > 0 {
                *count -= 1;
                marks[i] = Mark::Present;
            }
        }
    }

    Ok(Feedback(marks))
}
