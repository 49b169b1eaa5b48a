//! Word solving command
//!
//! Lets the engine play a full game against a known hidden word.

use crate::core::{Feedback, Word};
use crate::game::Game;
use crate::solver::{CandidateEngine, EngineError};
use anyhow::Result;

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub steps: Vec<SolveStep>,
}

/// A single guess step in the solution
pub struct SolveStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play `game` to the end with guesses from `engine`
///
/// # Errors
///
/// Returns an error if the engine and game disagree on word length, or if
/// the engine runs out of candidates (the hidden word is not in its list).
pub fn solve_word(engine: &mut CandidateEngine, game: &mut Game) -> Result<SolveResult> {
    if engine.n_letters() != game.n_letters() {
        return Err(EngineError::LengthMismatch {
            expected: engine.n_letters(),
            actual: game.n_letters(),
        }
        .into());
    }

    let mut steps = Vec::new();

    while !game.is_done() {
        let candidates_before = engine.pool_len();
        let guess = engine.best_guess()?;
        let feedback = game.guess(&guess)?;
        engine.apply_feedback(&guess, &feedback)?;

        steps.push(SolveStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: engine.pool_len(),
        });
    }

    Ok(SolveResult {
        target: game.hidden().clone(),
        success: game.is_won(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RankingMode;
    use crate::wordlists::{WORDS, WORDS_COUNT, words_from_slice};

    fn engine() -> CandidateEngine {
        CandidateEngine::new(words_from_slice(WORDS), 5, RankingMode::Across)
    }

    #[test]
    fn solves_ratio() {
        let mut engine = engine();
        let mut game = Game::new(Word::new("ratio").unwrap(), WORDS_COUNT);

        let result = solve_word(&mut engine, &mut game).unwrap();

        assert!(result.success);
        assert_eq!(result.target.text(), "ratio");
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess.text(), "ratio");
        assert!(last.feedback.is_solved());
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn candidate_counts_never_grow() {
        let mut engine = engine();
        let mut game = Game::new(Word::new("speed").unwrap(), WORDS_COUNT);

        let result = solve_word(&mut engine, &mut game).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn respects_max_guesses() {
        let mut engine = engine();
        let mut game = Game::new(Word::new("ratio").unwrap(), 1);

        let result = solve_word(&mut engine, &mut game).unwrap();
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn unknown_hidden_word_is_an_error() {
        let mut engine = engine();
        // Every guess is wrong, so the pool eventually empties
        let mut game = Game::new(Word::new("qxzjv").unwrap(), WORDS_COUNT);

        assert!(solve_word(&mut engine, &mut game).is_err());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let mut engine = engine();
        let mut game = Game::new(Word::new("pizzazz").unwrap(), 6);

        assert!(solve_word(&mut engine, &mut game).is_err());
    }
}
