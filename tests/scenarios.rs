//! End-to-end scenarios over the public API

use wordle_hardmode::core::{Feedback, Mark, Word, score};
use wordle_hardmode::solver::{CandidateEngine, EngineError, EngineState, RankingMode};
use wordle_hardmode::wordlists::{WORDS, words_from_slice};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn ratio_scenario_with_embedded_words() {
    let mut engine = CandidateEngine::new(words_from_slice(WORDS), 5, RankingMode::Across);
    let hidden = word("ratio");

    let expected = ["YYYKK", "GYKYK", "GGGGG"];
    for (guess, expected) in ["arise", "route", "ratio"].iter().zip(expected) {
        let guess = word(guess);
        let feedback = score(&hidden, &guess).unwrap();
        assert_eq!(feedback.to_string(), expected);

        let before = engine.pool_len();
        engine.record_guess(guess.clone()).unwrap();
        engine.apply_feedback(&guess, &feedback).unwrap();

        assert!(engine.contains(&hidden));
        assert!(engine.pool_len() <= before);
    }

    assert_eq!(engine.pool(), [hidden.clone()]);
    assert_eq!(engine.state(), EngineState::Solved);
    assert_eq!(engine.best_guess().unwrap(), hidden);
}

#[test]
fn contradiction_in_three_word_pool() {
    let pool = vec![word("crane"), word("slate"), word("irate")];
    let mut engine = CandidateEngine::new(pool, 5, RankingMode::Combined);

    let guess = engine.best_guess().unwrap();
    let all_absent = Feedback::new(vec![Mark::Absent; 5]);

    assert!(matches!(
        engine.apply_feedback(&guess, &all_absent),
        Err(EngineError::Contradiction { .. })
    ));
    assert_eq!(engine.pool_len(), 3);
}

#[test]
fn self_play_soundness_for_every_mode() {
    let words = words_from_slice(WORDS);

    for mode in RankingMode::ALL {
        let base = CandidateEngine::new(words.clone(), 5, mode);
        for hidden in words.iter().step_by(7) {
            let mut engine = base.clone();
            loop {
                let guess = engine.best_guess().unwrap();
                let feedback = score(hidden, &guess).unwrap();
                let before = engine.pool_len();
                engine.apply_feedback(&guess, &feedback).unwrap();

                assert!(
                    engine.contains(hidden),
                    "{mode}: lost '{hidden}' after '{guess}' => {feedback}"
                );
                assert!(engine.pool_len() <= before);
                if feedback.is_solved() {
                    break;
                }
            }
            assert_eq!(engine.pool(), [hidden.clone()]);
        }
    }
}

#[test]
fn feedback_text_round_trips_through_engine() {
    let hidden = word("speed");
    let guess = word("erase");
    let feedback = score(&hidden, &guess).unwrap();
    let reparsed: Feedback = feedback.to_string().parse().unwrap();
    assert_eq!(reparsed, feedback);

    let mut engine = CandidateEngine::new(words_from_slice(WORDS), 5, RankingMode::Across);
    engine.record_guess(guess.clone()).unwrap();
    engine.apply_feedback(&guess, &reparsed).unwrap();
    assert!(engine.contains(&hidden));
}
