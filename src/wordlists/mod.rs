//! Word lists for the solver
//!
//! An embedded default bank plus a loader for word lists on disk. Callers
//! pass paths in explicitly; nothing here reads the environment.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, filter_length, load, load_from_file, words_from_slice};
