//! Single Wordle game against a known hidden word

use crate::core::{Feedback, Word, score};
use thiserror::Error;

/// Error type for game moves
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess must have {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("the game is over")]
    GameOver,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    hidden: Word,
    max_guesses: usize,
    history: Vec<(Word, Feedback)>,
    won: bool,
}

impl Game {
    /// Start a game for `hidden` with at most `max_guesses` guesses
    #[must_use]
    pub const fn new(hidden: Word, max_guesses: usize) -> Self {
        Self {
            hidden,
            max_guesses,
            history: Vec::new(),
            won: false,
        }
    }

    /// Score a guess and record it
    ///
    /// The game ends when the guess is correct or the last attempt is used.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::LengthMismatch` if the guess has the wrong length;
    ///   such a guess does not use up an attempt
    pub fn guess(&mut self, guess: &Word) -> Result<Feedback, GameError> {
        if self.is_done() {
            return Err(GameError::GameOver);
        }

        let feedback = score(&self.hidden, guess).map_err(|_| GameError::LengthMismatch {
            expected: self.hidden.len(),
            actual: guess.len(),
        })?;
        self.won = feedback.is_solved();
        self.history.push((guess.clone(), feedback.clone()));
        Ok(feedback)
    }

    /// Guesses used so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Attempt limit
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Word length for this game
    #[must_use]
    pub fn n_letters(&self) -> usize {
        self.hidden.len()
    }

    /// Guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// True once the word is found or no attempts remain
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.won || self.history.len() >= self.max_guesses
    }

    /// True if the hidden word was found
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// The hidden word, for the end-of-game reveal
    #[must_use]
    pub const fn hidden(&self) -> &Word {
        &self.hidden
    }
}
