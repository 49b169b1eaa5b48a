//! Human play mode
//!
//! The user guesses against a hidden word. Guesses must be words from the
//! session's list.

use crate::core::Word;
use crate::game::Game;
use crate::output::Keyboard;
use crate::output::formatters::colored_tiles;
use anyhow::Result;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// Play `game` interactively; returns whether the word was found
///
/// Ends early, as a loss, when input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    dictionary: &[Word],
    mut input: R,
    mut out: W,
) -> Result<bool> {
    let n_letters = game.n_letters();
    let known: FxHashSet<&str> = dictionary.iter().map(Word::text).collect();
    let mut keyboard = Keyboard::new();

    writeln!(out, "\n{}", "Wordle".bold())?;
    writeln!(out, "Guess the {n_letters}-letter word in {} tries.\n", game.max_guesses())?;

    while !game.is_done() {
        write!(out, "Guess a {n_letters} letter word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let guess = match Word::new(line.trim()) {
            Ok(word) => word,
            Err(err) => {
                writeln!(out, "{} {err}", "✗".red())?;
                continue;
            }
        };
        if guess.len() != n_letters {
            writeln!(
                out,
                "Must guess a {n_letters}-letter word. Your word was {} letters.",
                guess.len()
            )?;
            continue;
        }
        if !known.contains(guess.text()) {
            writeln!(out, "\"{guess}\" is not a word.")?;
            continue;
        }

        let feedback = game.guess(&guess)?;
        keyboard.record(&guess, &feedback);

        writeln!(out, "\nAttempt {}/{}\n", game.attempts(), game.max_guesses())?;
        for (word, fb) in game.history() {
            writeln!(out, "   {}", colored_tiles(word, fb))?;
        }
        writeln!(out, "\n{}\n", keyboard.render())?;
    }

    if game.is_won() {
        writeln!(out, "{}", "Congrats!".green().bold())?;
        writeln!(out, "{}/{}", game.attempts(), game.max_guesses())?;
    } else {
        writeln!(out, "{}", "Too bad!".red().bold())?;
        writeln!(out, "The word was {}", game.hidden().text().to_uppercase())?;
        writeln!(out, "X/{}", game.max_guesses())?;
    }
    for (_, feedback) in game.history() {
        writeln!(out, "{}", feedback.to_emoji())?;
    }

    Ok(game.is_won())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, words_from_slice};

    fn run(hidden: &str, max_guesses: usize, script: &str) -> (bool, String) {
        colored::control::set_override(false);
        let dictionary = words_from_slice(WORDS);
        let mut game = Game::new(Word::new(hidden).unwrap(), max_guesses);
        let mut out = Vec::new();
        let won = run_play(&mut game, &dictionary, script.as_bytes(), &mut out).unwrap();
        (won, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_grid() {
        let (won, output) = run("ratio", 6, "arise\nroute\nratio\n");

        assert!(won);
        assert!(output.contains("Congrats!"));
        assert!(output.contains("3/6"));
        assert!(output.contains("🟨🟨🟨⬛⬛"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let (won, output) = run("ratio", 6, "rat\nqxzjv\nr4tio\nratio\n");

        assert!(won);
        assert!(output.contains("Must guess a 5-letter word. Your word was 3 letters."));
        assert!(output.contains("\"qxzjv\" is not a word."));
        assert!(output.contains("1/6"));
    }

    #[test]
    fn losing_game_reveals_word() {
        let (won, output) = run("ratio", 2, "arise\nroute\n");

        assert!(!won);
        assert!(output.contains("Too bad!"));
        assert!(output.contains("The word was RATIO"));
        assert!(output.contains("X/2"));
    }
}
