//! Wordle Hard-Mode Solver
//!
//! Scores Wordle guesses and solves games by narrowing a candidate pool with
//! each round of feedback, ranking what is left by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hardmode::core::{Word, score};
//! use wordle_hardmode::solver::{CandidateEngine, RankingMode};
//! use wordle_hardmode::wordlists::{WORDS, words_from_slice};
//!
//! let hidden = Word::new("ratio").unwrap();
//! let mut engine = CandidateEngine::new(words_from_slice(WORDS), 5, RankingMode::Across);
//!
//! while !engine.is_solved() {
//!     let guess = engine.best_guess().unwrap();
//!     let feedback = score(&hidden, &guess).unwrap();
//!     engine.apply_feedback(&guess, &feedback).unwrap();
//! }
//! assert_eq!(engine.best_guess().unwrap(), hidden);
//! ```

// Core domain types
pub mod core;

// Candidate engine
pub mod solver;

// Word lists
pub mod wordlists;

// Hidden-word simulator
pub mod game;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
