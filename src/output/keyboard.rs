//! On-screen keyboard showing what is known about each letter

use super::formatters::tile;
use crate::core::{Feedback, Mark, Word};

const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known mark per letter across all guesses so far
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    marks: [Option<Mark>; 26],
}

impl Keyboard {
    /// Empty keyboard, nothing known
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess into the keyboard
    ///
    /// A letter keeps its strongest mark: exact beats present beats absent.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            let slot = &mut self.marks[usize::from(letter - b'a')];
            if slot.is_none_or(|current| strength(mark) > strength(current)) {
                *slot = Some(mark);
            }
        }
    }

    /// Best-known mark for a letter
    #[must_use]
    pub fn mark_of(&self, letter: u8) -> Option<Mark> {
        letter
            .checked_sub(b'a')
            .and_then(|i| self.marks.get(usize::from(i)))
            .copied()
            .flatten()
    }

    /// Three staggered QWERTY rows of colored keys
    #[must_use]
    pub fn render(&self) -> String {
        ROWS.iter()
            .enumerate()
            .map(|(i, row)| {
                let keys: String = row
                    .bytes()
                    .map(|b| tile(b as char, self.mark_of(b)).to_string())
                    .collect();
                format!("{}{keys}", " ".repeat(2 * i + 1))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const fn strength(mark: Mark) -> u8 {
    match mark {
        Mark::Exact => 2,
        Mark::Present => 1,
        Mark::Absent => 0,
    }
}
