//! Letter frequency statistics over the candidate pool
//!
//! Rebuilt from scratch after every filtering step. Locked positions carry
//! no table and contribute nothing to any score.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

use super::RankingMode;

/// Positions resolved to an exact match, and the letter found there
pub type LockedPositions = BTreeMap<usize, u8>;

/// Per-position and across-position letter counts for a pool
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolStats {
    positions: Vec<Option<FxHashMap<u8, usize>>>,
    across: FxHashMap<u8, usize>,
}

/// Ranking scores for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateScore {
    /// How many candidates share this word's letter at each open position
    pub inplace: usize,
    /// Across-position frequency of each distinct letter at open positions
    pub across: usize,
}

impl CandidateScore {
    /// Equal-weight sum of both scores
    #[must_use]
    pub const fn combined(self) -> usize {
        self.inplace + self.across
    }

    /// The score used for a ranking mode
    #[must_use]
    pub const fn for_mode(self, mode: RankingMode) -> usize {
        match mode {
            RankingMode::Inplace => self.inplace,
            RankingMode::Across => self.across,
            RankingMode::Combined => self.combined(),
        }
    }
}

impl PoolStats {
    /// Count letters over `pool` for every position not in `locked`
    ///
    /// The across table is the sum of the per-position tables.
    #[must_use]
    pub fn compute(pool: &[Word], locked: &LockedPositions, n_letters: usize) -> Self {
        let mut positions: Vec<Option<FxHashMap<u8, usize>>> = (0..n_letters)
            .map(|i| (!locked.contains_key(&i)).then(FxHashMap::default))
            .collect();

        for word in pool {
            for (table, &letter) in positions.iter_mut().zip(word.letters()) {
                if let Some(table) = table {
                    *table.entry(letter).or_insert(0) += 1;
                }
            }
        }

        let mut across: FxHashMap<u8, usize> = FxHashMap::default();
        for table in positions.iter().flatten() {
            for (&letter, &count) in table {
                *across.entry(letter).or_insert(0) += count;
            }
        }

        Self { positions, across }
    }

    /// True if `position` is locked (no frequency table)
    #[must_use]
    pub fn is_locked(&self, position: usize) -> bool {
        matches!(self.positions.get(position), Some(None))
    }

    /// Frequency table for an open position
    #[must_use]
    pub fn position_table(&self, position: usize) -> Option<&FxHashMap<u8, usize>> {
        self.positions.get(position).and_then(Option::as_ref)
    }

    /// Candidates with `letter` at `position` (0 for locked positions)
    #[must_use]
    pub fn position_count(&self, position: usize, letter: u8) -> usize {
        self.position_table(position)
            .and_then(|table| table.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of `letter` across all open positions of all candidates
    #[must_use]
    pub fn across_count(&self, letter: u8) -> usize {
        self.across.get(&letter).copied().unwrap_or(0)
    }

    /// Score a candidate against these statistics
    ///
    /// A letter repeated at a later open position adds nothing to `across`.
    #[must_use]
    pub fn score(&self, word: &Word) -> CandidateScore {
        let mut score = CandidateScore::default();
        let mut seen: Vec<u8> = Vec::with_capacity(word.len());

        for (position, &letter) in word.letters().iter().enumerate() {
            if self.is_locked(position) {
                continue;
            }
            score.inplace += self.position_count(position, letter);
            if !seen.contains(&letter) {
                seen.push(letter);
                score.across += self.across_count(letter);
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn position_and_across_counts() {
        let pool = words(&["crane", "crate", "trace"]);
        let stats = PoolStats::compute(&pool, &LockedPositions::new(), 5);

        assert_eq!(stats.position_count(0, b'c'), 2);
        assert_eq!(stats.position_count(0, b't'), 1);
        assert_eq!(stats.position_count(1, b'r'), 3);
        assert_eq!(stats.position_count(3, b'n'), 1);
        assert_eq!(stats.position_count(3, b'z'), 0);

        assert_eq!(stats.across_count(b'c'), 3);
        assert_eq!(stats.across_count(b't'), 2);
        assert_eq!(stats.across_count(b'e'), 3);
        assert_eq!(stats.across_count(b'z'), 0);
    }

    #[test]
    fn candidate_scores() {
        let pool = words(&["crane", "crate", "trace"]);
        let stats = PoolStats::compute(&pool, &LockedPositions::new(), 5);

        let crane = stats.score(&pool[0]);
        assert_eq!(crane.inplace, 12);
        assert_eq!(crane.across, 13);
        assert_eq!(crane.combined(), 25);

        let crate_ = stats.score(&pool[1]);
        assert_eq!((crate_.inplace, crate_.across), (12, 14));

        let trace = stats.score(&pool[2]);
        assert_eq!((trace.inplace, trace.across), (11, 14));
    }

    #[test]
    fn repeated_letter_counted_once_across() {
        let pool = words(&["geese", "crane"]);
        let stats = PoolStats::compute(&pool, &LockedPositions::new(), 5);

        // e appears 4 times across the pool, counted once for GEESE
        assert_eq!(stats.across_count(b'e'), 4);
        let geese = stats.score(&pool[0]);
        assert_eq!(geese.across, 1 + 4 + 1);
        assert_eq!(geese.inplace, 1 + 1 + 1 + 1 + 2);

        let crane = stats.score(&pool[1]);
        assert_eq!(crane.across, 1 + 1 + 1 + 1 + 4);
    }

    #[test]
    fn locked_positions_excluded() {
        let pool = words(&["crane", "crate"]);
        let locked = LockedPositions::from([(0, b'c'), (1, b'r')]);
        let stats = PoolStats::compute(&pool, &locked, 5);

        assert!(stats.is_locked(0));
        assert!(stats.is_locked(1));
        assert!(!stats.is_locked(2));
        assert_eq!(stats.position_count(0, b'c'), 0);
        assert_eq!(stats.across_count(b'c'), 0);
        assert_eq!(stats.across_count(b'r'), 0);

        // Only positions 2..5 contribute: a(2) + n/t(1) + e(2)
        let crane = stats.score(&pool[0]);
        assert_eq!(crane.inplace, 2 + 1 + 2);
        assert_eq!(crane.across, 2 + 1 + 2);
    }

    #[test]
    fn recompute_is_idempotent() {
        let pool = words(&["crane", "crate", "trace", "geese"]);
        let locked = LockedPositions::from([(4, b'e')]);
        let first = PoolStats::compute(&pool, &locked, 5);
        let second = PoolStats::compute(&pool, &locked, 5);

        assert_eq!(first, second);
        for word in &pool {
            assert_eq!(first.score(word), second.score(word));
        }
    }

    #[test]
    fn score_for_mode() {
        let score = CandidateScore {
            inplace: 3,
            across: 5,
        };
        assert_eq!(score.for_mode(RankingMode::Inplace), 3);
        assert_eq!(score.for_mode(RankingMode::Across), 5);
        assert_eq!(score.for_mode(RankingMode::Combined), 8);
    }
}
