//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile colored by its mark
#[must_use]
pub fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Exact) => text.white().bold().on_green(),
        Some(Mark::Present) => text.white().bold().on_yellow(),
        Some(Mark::Absent) => text.white().bold().on_black(),
        None => text.black().on_white(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(letter as char, Some(mark)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
