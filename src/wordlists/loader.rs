//! Word list loading utilities
//!
//! Entries are trimmed and lowercased; blanks, comments (`#`) and anything
//! that is not purely alphabetic are skipped. Repeats are dropped, keeping
//! the first occurrence, so list order is preserved.

use crate::config::WordListSource;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", path.display())]
    NoWords { path: PathBuf },
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::NoWords` if it holds no valid entries.
///
/// # Examples
/// ```no_run
/// use wordle_hardmode::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(content.lines());
    if words.is_empty() {
        return Err(LoadError::NoWords {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use wordle_hardmode::wordlists::{WORDS, words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied())
}

/// Load words from a configured source
///
/// # Errors
///
/// Propagates `load_from_file` errors for `WordListSource::File`.
pub fn load(source: &WordListSource) -> Result<Vec<Word>, LoadError> {
    match source {
        WordListSource::Embedded => Ok(words_from_slice(super::WORDS)),
        WordListSource::File(path) => load_from_file(path),
    }
}

/// Keep only words with `n_letters` letters
#[must_use]
pub fn filter_length(words: &[Word], n_letters: usize) -> Vec<Word> {
    words
        .iter()
        .filter(|w| w.len() == n_letters)
        .cloned()
        .collect()
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
