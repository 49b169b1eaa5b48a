//! Session drivers
//!
//! Each command wires the engine, the game simulator and the output module
//! together. Interactive commands take their input and output streams as
//! parameters so they can be scripted.

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveResult, SolveStep, solve_word};
