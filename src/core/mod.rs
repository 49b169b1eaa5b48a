//! Core domain types for Wordle
//!
//! Words, feedback marks and the feedback scorer. Everything here is pure:
//! no I/O, no shared state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark, score};
pub use word::{Word, WordError};
