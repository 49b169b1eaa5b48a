//! Session configuration
//!
//! Everything a session needs is passed in here: where the words come from,
//! how long they are, how candidates are ranked and how many guesses a game
//! allows.

use crate::core::Word;
use crate::solver::RankingMode;
use std::fmt;
use std::path::PathBuf;

/// Default number of guesses per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Default word length when no hidden word fixes it
pub const DEFAULT_LETTERS: usize = 5;

/// Where a session's word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListSource {
    /// The word bank compiled into the binary
    #[default]
    Embedded,
    /// A file with one word per line
    File(PathBuf),
}

impl WordListSource {
    /// Parse a command-line value: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for one solving or playing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_list: WordListSource,
    /// Fixed word length; `None` derives it from the hidden word
    pub n_letters: Option<usize>,
    pub ranking: RankingMode,
    pub max_guesses: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_list: WordListSource::Embedded,
            n_letters: None,
            ranking: RankingMode::default(),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl SessionConfig {
    /// Word length for a session, preferring the hidden word's length
    #[must_use]
    pub fn letters_for(&self, hidden: Option<&Word>) -> usize {
        hidden
            .map(Word::len)
            .or(self.n_letters)
            .unwrap_or(DEFAULT_LETTERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.word_list, WordListSource::Embedded);
        assert_eq!(config.ranking, RankingMode::Across);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.letters_for(None), 5);
    }

    #[test]
    fn letters_follow_hidden_word() {
        let config = SessionConfig {
            n_letters: Some(4),
            ..SessionConfig::default()
        };
        assert_eq!(config.letters_for(None), 4);
        let hidden = Word::new("pizzazz").unwrap();
        assert_eq!(config.letters_for(Some(&hidden)), 7);
    }

    #[test]
    fn word_list_source_from_arg() {
        assert_eq!(WordListSource::from_arg("embedded"), WordListSource::Embedded);
        assert_eq!(
            WordListSource::from_arg("lists/sgb.txt"),
            WordListSource::File(PathBuf::from("lists/sgb.txt"))
        );
        assert_eq!(WordListSource::Embedded.to_string(), "embedded");
    }
}
