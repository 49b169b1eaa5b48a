//! Hidden-word game simulator
//!
//! Plays the role of the live game: it knows the hidden word, scores
//! guesses and enforces the attempt limit.

mod simulator;

pub use simulator::{Game, GameError};
