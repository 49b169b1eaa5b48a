//! Benchmark command
//!
//! Plays one game per target word and summarizes how the engine did. Games
//! run in parallel, each with its own engine.

use super::solve::solve_word;
use crate::core::Word;
use crate::game::Game;
use crate::solver::CandidateEngine;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a game for every target word
///
/// Each game starts from a clone of `base`. A game that errors (the target
/// is missing from the word list) counts as a failure.
#[must_use]
pub fn run_benchmark(
    base: &CandidateEngine,
    targets: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<(&Word, Option<usize>)> = targets
        .par_iter()
        .map(|target| {
            let guesses = play_one(base.clone(), target, max_guesses);
            pb.inc(1);
            (target, guesses)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    for (target, guesses) in &outcomes {
        match guesses {
            Some(n) => *distribution.entry(*n).or_insert(0) += 1,
            None => failures.push((*target).clone()),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(n, count)| n * count).sum();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        failed: failures.len(),
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Guesses needed to find `target`, or `None` on a loss
fn play_one(mut engine: CandidateEngine, target: &Word, max_guesses: usize) -> Option<usize> {
    let mut game = Game::new(target.clone(), max_guesses);
    match solve_word(&mut engine, &mut game) {
        Ok(result) if result.success => Some(result.steps.len()),
        Ok(_) => None,
        Err(err) => {
            warn!("benchmark game for '{target}' failed: {err:#}");
            None
        }
    }
}
