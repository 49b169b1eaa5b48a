//! Hard-mode solving engine
//!
//! The engine keeps a pool of candidate words, ranks them by letter
//! frequency and filters them with each round of feedback.

mod engine;
mod error;
mod filter;
mod ranking;
pub mod stats;

pub use engine::{CandidateEngine, EngineState};
pub use error::EngineError;
pub use ranking::RankingMode;
pub use stats::{CandidateScore, LockedPositions, PoolStats};
