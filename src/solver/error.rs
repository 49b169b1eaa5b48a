//! Engine error type

use crate::core::{Feedback, Word};
use thiserror::Error;

/// Errors raised by [`CandidateEngine`](super::CandidateEngine)
///
/// None of these leave the engine partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A guess or feedback does not have the session's letter count
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `best_guess` was asked for a guess with no candidates left
    #[error("no candidates remain; reset the engine to start over")]
    EmptyPool,

    /// Feedback is inconsistent with every remaining candidate
    #[error("feedback {feedback} for '{guess}' is inconsistent with every remaining candidate")]
    Contradiction { guess: Word, feedback: Feedback },

    /// Feedback was supplied for a word the engine never issued or recorded
    #[error("'{0}' was never issued as a guess in this session")]
    GuessNotIssued(Word),
}
