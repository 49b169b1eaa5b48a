//! Candidate engine: the stateful heart of the solver
//!
//! Holds the candidate pool for one game session, ranks candidates by letter
//! frequency and narrows the pool as feedback arrives. One engine serves one
//! session; engines share nothing.

use super::error::EngineError;
use super::filter::filter_pool;
use super::stats::{CandidateScore, LockedPositions, PoolStats};
use super::RankingMode;
use crate::core::{Feedback, Word};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

/// Where the engine is in the guess/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Candidates remain and no guess is waiting for feedback
    Ready,
    /// A guess has been issued and its feedback has not been applied
    AwaitingFeedback,
    /// Exactly one candidate remains
    Solved,
    /// The word list held no words of the session's length
    Exhausted,
}

/// Frequency-ranked candidate engine
///
/// # Examples
/// ```
/// use wordle_hardmode::core::{Word, score};
/// use wordle_hardmode::solver::{CandidateEngine, RankingMode};
///
/// let words: Vec<Word> = ["crane", "crate", "trace", "ratio"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let hidden = Word::new("ratio").unwrap();
///
/// let mut engine = CandidateEngine::new(words, 5, RankingMode::Across);
/// let guess = engine.best_guess().unwrap();
/// let feedback = score(&hidden, &guess).unwrap();
/// engine.apply_feedback(&guess, &feedback).unwrap();
///
/// assert!(engine.contains(&hidden));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateEngine {
    word_list: Vec<Word>,
    n_letters: usize,
    ranking: RankingMode,
    pool: Vec<Word>,
    locked: LockedPositions,
    stats: PoolStats,
    guesses: Vec<Word>,
    rounds: Vec<(Word, Feedback)>,
    awaiting_feedback: bool,
}

impl CandidateEngine {
    /// Create an engine over `words` for `n_letters`-letter games
    ///
    /// Words of any other length are discarded, as are repeats (the first
    /// occurrence keeps its place). List order is the tie-break order for
    /// `best_guess`. With `n_letters == 0` nothing survives and the engine
    /// is `Exhausted`.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        n_letters: usize,
        ranking: RankingMode,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let word_list: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == n_letters)
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();

        let mut engine = Self {
            word_list,
            n_letters,
            ranking,
            pool: Vec::new(),
            locked: LockedPositions::new(),
            stats: PoolStats::default(),
            guesses: Vec::new(),
            rounds: Vec::new(),
            awaiting_feedback: false,
        };
        engine.reset();
        engine
    }

    /// Restore the full word list and forget all guesses and feedback
    pub fn reset(&mut self) {
        self.pool.clone_from(&self.word_list);
        self.locked.clear();
        self.guesses.clear();
        self.rounds.clear();
        self.awaiting_feedback = false;
        self.refresh_stats();
        info!(
            "engine reset: {} candidates of length {} ({} ranking)",
            self.pool.len(),
            self.n_letters,
            self.ranking
        );
    }

    /// Pick the highest-ranked candidate and record it as issued
    ///
    /// Ties go to the candidate earliest in the word list. The pool is not
    /// changed.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyPool` if no candidates remain.
    pub fn best_guess(&mut self) -> Result<Word, EngineError> {
        let mode = self.ranking;
        let (best, score) = self
            .pool
            .iter()
            .map(|word| (word, self.stats.score(word)))
            .fold(None, |best: Option<(&Word, CandidateScore)>, (word, score)| {
                match best {
                    Some((_, top)) if top.for_mode(mode) >= score.for_mode(mode) => best,
                    _ => Some((word, score)),
                }
            })
            .ok_or(EngineError::EmptyPool)?;
        let best = best.clone();

        debug!(
            "guess {}: '{best}' ({mode} score {}) from {} candidates",
            self.guesses.len() + 1,
            score.for_mode(mode),
            self.pool.len()
        );
        self.guesses.push(best.clone());
        self.awaiting_feedback = true;
        Ok(best)
    }

    /// Register a guess chosen outside the engine
    ///
    /// Lets a driver play its own word and still apply the feedback for it.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the word has the wrong length.
    pub fn record_guess(&mut self, guess: Word) -> Result<(), EngineError> {
        self.check_len(guess.len())?;
        debug!("recorded external guess '{guess}'");
        self.guesses.push(guess);
        self.awaiting_feedback = true;
        Ok(())
    }

    /// Narrow the pool with the feedback for an issued guess
    ///
    /// On success the statistics are rebuilt from the new pool. On any error
    /// the engine is left exactly as it was.
    ///
    /// # Errors
    /// - `EngineError::LengthMismatch` if the guess or feedback has the wrong length
    /// - `EngineError::GuessNotIssued` if the guess was never issued or recorded
    /// - `EngineError::Contradiction` if no candidate survives
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), EngineError> {
        self.check_len(guess.len())?;
        self.check_len(feedback.len())?;
        if !self.guesses.contains(guess) {
            return Err(EngineError::GuessNotIssued(guess.clone()));
        }

        let before = self.pool.len();
        let filtered = filter_pool(&self.pool, &self.locked, guess, feedback);

        if filtered.pool.is_empty() {
            warn!("feedback {feedback} for '{guess}' eliminated all {before} candidates");
            return Err(EngineError::Contradiction {
                guess: guess.clone(),
                feedback: feedback.clone(),
            });
        }

        self.pool = filtered.pool;
        self.locked = filtered.locked;
        self.rounds.push((guess.clone(), feedback.clone()));
        self.awaiting_feedback = false;
        self.refresh_stats();

        debug!(
            "'{guess}' => {feedback}: {before} -> {} candidates",
            self.pool.len()
        );
        Ok(())
    }

    /// Current state of the guess/feedback cycle
    #[must_use]
    pub fn state(&self) -> EngineState {
        match self.pool.len() {
            0 => EngineState::Exhausted,
            1 => EngineState::Solved,
            _ if self.awaiting_feedback => EngineState::AwaitingFeedback,
            _ => EngineState::Ready,
        }
    }

    /// True when exactly one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pool.len() == 1
    }

    /// Remaining candidates, in word-list order
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// True if `word` is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.pool.contains(word)
    }

    /// Word length for this session
    #[must_use]
    pub const fn n_letters(&self) -> usize {
        self.n_letters
    }

    /// Active ranking mode
    #[must_use]
    pub const fn ranking(&self) -> RankingMode {
        self.ranking
    }

    /// Resolved positions and their letters
    #[must_use]
    pub const fn locked(&self) -> &LockedPositions {
        &self.locked
    }

    /// Every guess issued or recorded this session
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Applied (guess, feedback) pairs, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[(Word, Feedback)] {
        &self.rounds
    }

    /// Letter statistics for the current pool
    #[must_use]
    pub const fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Top `limit` candidates with their scores, best first
    #[must_use]
    pub fn ranked(&self, limit: usize) -> Vec<(&Word, CandidateScore)> {
        let mode = self.ranking;
        let mut scored: Vec<(&Word, CandidateScore)> = self
            .pool
            .iter()
            .map(|word| (word, self.stats.score(word)))
            .collect();
        scored.sort_by_key(|(_, score)| std::cmp::Reverse(score.for_mode(mode)));
        scored.truncate(limit);
        scored
    }

    fn check_len(&self, actual: usize) -> Result<(), EngineError> {
        if actual == self.n_letters {
            Ok(())
        } else {
            Err(EngineError::LengthMismatch {
                expected: self.n_letters,
                actual,
            })
        }
    }

    fn refresh_stats(&mut self) {
        self.stats = PoolStats::compute(&self.pool, &self.locked, self.n_letters);
    }
}
