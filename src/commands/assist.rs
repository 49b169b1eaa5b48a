//! Interactive assistant mode
//!
//! The engine suggests a guess, the user plays it (or another word) in a
//! real game and types back the feedback.

use crate::core::{Feedback, Mark, Word};
use crate::output::{formatters::colored_tiles, write_status};
use crate::solver::{CandidateEngine, EngineError};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the assistant until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_assist<R: BufRead, W: Write>(
    engine: &mut CandidateEngine,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let n_letters = engine.n_letters();

    writeln!(out, "\nWordle hard-mode assistant ({n_letters} letters)")?;
    writeln!(out, "After each guess, enter the feedback:")?;
    writeln!(out, "  G = green (right spot), Y = yellow (wrong spot), K = black (absent)")?;
    writeln!(out, "Commands: 'status', 'undo', 'reset', 'quit'\n")?;

    loop {
        let turn = engine.rounds().len() + 1;
        // Only issued once the user accepts it
        let Some(suggestion) = engine.ranked(1).first().map(|(word, _)| (*word).clone()) else {
            writeln!(out, "{} {}", "✗".red(), EngineError::EmptyPool)?;
            return Ok(());
        };

        writeln!(out, "{}", "─".repeat(50))?;
        writeln!(
            out,
            "Turn {turn}: {} candidates remaining",
            engine.pool_len()
        )?;
        if engine.is_solved() {
            writeln!(out, "Only one word fits: {}", suggestion.text().to_uppercase().bold())?;
        } else {
            writeln!(out, "Suggested guess: {}", suggestion.text().to_uppercase().bold())?;
        }

        let Some(line) = prompt(&mut input, &mut out, "Word played (enter to accept)")? else {
            return Ok(());
        };
        let guess = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "reset" | "new" => {
                engine.reset();
                writeln!(out, "New game started.")?;
                continue;
            }
            "undo" | "u" => {
                undo(engine)?;
                writeln!(out, "Undone; back to turn {}.", engine.rounds().len() + 1)?;
                continue;
            }
            "status" | "s" => {
                write_status(&mut out, engine)?;
                continue;
            }
            "" => engine.best_guess()?,
            text => match Word::new(text) {
                Ok(word) => {
                    if let Err(err) = engine.record_guess(word.clone()) {
                        writeln!(out, "{} {err}", "✗".red())?;
                        continue;
                    }
                    word
                }
                Err(err) => {
                    writeln!(out, "{} {err}", "✗".red())?;
                    continue;
                }
            },
        };

        let feedback = loop {
            let Some(line) = prompt(&mut input, &mut out, "Feedback (G/Y/K or 'win')")? else {
                return Ok(());
            };
            let parsed = if matches!(line.to_lowercase().as_str(), "win" | "solved") {
                Ok(Feedback::new(vec![Mark::Exact; n_letters]))
            } else {
                line.parse::<Feedback>()
            };
            let feedback = match parsed {
                Ok(feedback) => feedback,
                Err(err) => {
                    writeln!(out, "{} {err}", "✗".red())?;
                    continue;
                }
            };

            match engine.apply_feedback(&guess, &feedback) {
                Ok(()) => break feedback,
                Err(err @ EngineError::Contradiction { .. }) => {
                    writeln!(out, "{} {err}", "✗".red())?;
                    writeln!(out, "Check the feedback and enter it again.")?;
                }
                Err(err) => writeln!(out, "{} {err}", "✗".red())?,
            }
        };

        writeln!(out, "{}", colored_tiles(&guess, &feedback))?;

        if feedback.is_solved() {
            let guesses = engine.rounds().len();
            writeln!(
                out,
                "\n{}",
                format!("Solved in {guesses} {}!", if guesses == 1 { "guess" } else { "guesses" })
                    .green()
                    .bold()
            )?;
            for (word, fb) in engine.rounds() {
                writeln!(out, "  {} {}", fb.to_emoji(), word.text().to_uppercase())?;
            }

            match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    engine.reset();
                }
                _ => return Ok(()),
            }
        }
    }
}

/// Drop the last applied round by replaying the others from scratch
fn undo(engine: &mut CandidateEngine) -> Result<(), EngineError> {
    let mut rounds = engine.rounds().to_vec();
    rounds.pop();
    engine.reset();
    for (guess, feedback) in rounds {
        engine.record_guess(guess.clone())?;
        engine.apply_feedback(&guess, &feedback)?;
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
