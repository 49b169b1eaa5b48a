//! Candidate filtering against one round of feedback
//!
//! Two left-to-right passes. The first applies every `Exact` mark: the
//! position is locked and only candidates with that letter there survive.
//! The second applies `Present` and `Absent` marks against each candidate's
//! de-greened letters, i.e. the letters left once resolved positions are
//! blanked out. Running the exact pass first is what lets a letter be
//! `Exact` in one position and `Absent` in another within one guess.
//!
//! Positions locked in an earlier round are never re-evaluated.

use super::stats::LockedPositions;
use crate::core::{Feedback, Mark, Word};
use log::trace;
use rustc_hash::FxHashMap;

/// Result of filtering: surviving candidates and the updated locks
pub(crate) struct Filtered {
    pub pool: Vec<Word>,
    pub locked: LockedPositions,
}

/// Filter `pool` by `guess`/`feedback`
///
/// The caller guarantees `guess` and `feedback` have the pool's length.
/// Inputs are left untouched; the caller commits the result.
pub(crate) fn filter_pool(
    pool: &[Word],
    locked: &LockedPositions,
    guess: &Word,
    feedback: &Feedback,
) -> Filtered {
    let previously_locked: Vec<bool> = (0..guess.len())
        .map(|i| locked.contains_key(&i))
        .collect();
    let mut locked = locked.clone();
    let mut pool = pool.to_vec();

    for (i, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
        if previously_locked[i] || mark != Mark::Exact {
            continue;
        }
        locked.insert(i, letter);
        pool.retain(|word| word.letter_at(i) == letter);
        trace!(
            "exact '{}' at {i}: {} candidates",
            letter as char,
            pool.len()
        );
    }

    // A locked position is blanked only when this guess carries the locked
    // letter there; otherwise the hidden letter there is still claimable.
    let mask: Vec<bool> = guess
        .letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| locked.get(&i) == Some(letter))
        .collect();

    let mut present: FxHashMap<u8, usize> = FxHashMap::default();
    for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
        if mark == Mark::Present {
            *present.entry(letter).or_insert(0) += 1;
        }
    }

    for (i, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
        if previously_locked[i] || mark == Mark::Exact {
            continue;
        }
        let claimed = present.get(&letter).copied().unwrap_or(0);

        match mark {
            Mark::Absent if claimed == 0 => {
                pool.retain(|word| degreened_count(word, letter, &mask) == 0);
            }
            // Repeated letter: the present marks account for every
            // unresolved occurrence, and none of them sits here.
            Mark::Absent => {
                pool.retain(|word| {
                    word.letter_at(i) != letter && degreened_count(word, letter, &mask) == claimed
                });
            }
            Mark::Present => {
                pool.retain(|word| {
                    word.letter_at(i) != letter && degreened_count(word, letter, &mask) >= claimed
                });
            }
            Mark::Exact => unreachable!("exact marks are applied in the first pass"),
        }
        trace!(
            "{mark:?} '{}' at {i}: {} candidates",
            letter as char,
            pool.len()
        );
    }

    Filtered { pool, locked }
}

/// Occurrences of `letter` in `word` outside the masked positions
fn degreened_count(word: &Word, letter: u8, mask: &[bool]) -> usize {
    word.letters()
        .iter()
        .zip(mask)
        .filter(|&(&l, &masked)| !masked && l == letter)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(pool: &[Word]) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    fn run(pool: &[&str], guess: &str, feedback: &str) -> Filtered {
        filter_pool(
            &words(pool),
            &LockedPositions::new(),
            &Word::new(guess).unwrap(),
            &feedback.parse().unwrap(),
        )
    }

    #[test]
    fn exact_locks_and_filters() {
        let result = run(&["crane", "crate", "slate"], "cribs", "GGKKK");
        assert_eq!(texts(&result.pool), ["crane", "crate"]);
        assert_eq!(result.locked.get(&0), Some(&b'c'));
        assert_eq!(result.locked.get(&1), Some(&b'r'));
        assert_eq!(result.locked.len(), 2);
    }

    #[test]
    fn absent_removes_containing_words() {
        let result = run(&["crane", "slate", "moist"], "pluck", "KKKKK");
        assert_eq!(texts(&result.pool), ["moist"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        // 'a' present but not at position 0
        let result = run(&["about", "crane", "moist", "alarm"], "abyss", "YKKKK");
        assert_eq!(texts(&result.pool), ["crane"]);
    }

    #[test]
    fn exact_then_absent_same_letter() {
        // Hidden LEMON: the E at 1 is exact, the E's at 0 and 4 are absent.
        // Words with a second E must go; LEMON must stay.
        let result = run(&["lemon", "geese", "jewel", "level"], "eerie", "KGKKK");
        assert_eq!(texts(&result.pool), ["lemon"]);
    }

    #[test]
    fn absent_before_exact_same_letter() {
        // Hidden CRANE: the E at 4 is exact, the earlier E's are absent
        let result = run(&["crane", "geese", "trace"], "eerie", "KKYKG");
        assert_eq!(texts(&result.pool), ["crane", "trace"]);
    }

    #[test]
    fn present_and_absent_same_letter() {
        // Hidden ALERT has exactly one E
        let result = run(&["alert", "elder", "enter", "crane"], "eerie", "YKYKK");
        assert_eq!(texts(&result.pool), ["alert"]);
    }

    #[test]
    fn previously_locked_positions_are_skipped() {
        let pool = words(&["crane", "crate"]);
        let locked = LockedPositions::from([(0, b'c')]);
        let result = filter_pool(
            &pool,
            &locked,
            &Word::new("crate").unwrap(),
            &"KGGGG".parse().unwrap(),
        );
        // Position 0 is locked already; its mark is ignored
        assert_eq!(texts(&result.pool), ["crate"]);
        assert_eq!(result.locked.get(&0), Some(&b'c'));
    }

    #[test]
    fn locked_letter_elsewhere_in_guess_is_not_masked() {
        // C locked at 0, but SCARF plays S there: CRANE's C at 0 is still
        // what makes SCARF's C present.
        let pool = words(&["crane", "chaos", "cramp"]);
        let locked = LockedPositions::from([(0, b'c')]);
        let result = filter_pool(
            &pool,
            &locked,
            &Word::new("scarf").unwrap(),
            &"KYGYK".parse().unwrap(),
        );
        assert_eq!(texts(&result.pool), ["crane", "cramp"]);
        assert_eq!(result.locked, LockedPositions::from([(0, b'c'), (2, b'a')]));
    }

    #[test]
    fn filtering_never_grows_the_pool() {
        let pool = ["crane", "crate", "trace", "react", "cater"];
        for (guess, feedback) in [("crane", "GGGKY"), ("trace", "YYYYY"), ("zzzzz", "KKKKK")] {
            let result = run(&pool, guess, feedback);
            assert!(result.pool.len() <= pool.len());
        }
    }
}
