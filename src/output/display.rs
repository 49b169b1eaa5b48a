//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::CandidateEngine;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_tiles(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        percent(result.solved, result.total_words)
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = percent(count, result.total_words);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        for word in result.failures.iter().take(20) {
            println!("   {}", word.text().to_uppercase());
        }
        if result.failures.len() > 20 {
            println!("   ... and {} more", result.failures.len() - 20);
        }
    }
}

/// Write the session status: rounds so far, resolved letters and the top
/// candidates
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_status<W: Write>(out: &mut W, engine: &CandidateEngine) -> io::Result<()> {
    writeln!(out, "Status")?;
    for (i, (guess, feedback)) in engine.rounds().iter().enumerate() {
        writeln!(out, "Guess {}: {guess} => {feedback}", i + 1)?;
    }

    let pattern: String = (0..engine.n_letters())
        .map(|i| engine.locked().get(&i).map_or('_', |&b| b as char))
        .collect();
    writeln!(out, "Resolved: {pattern}")?;
    writeln!(
        out,
        "{} candidates ({} ranking)",
        engine.pool_len(),
        engine.ranking()
    )?;

    for (word, score) in engine.ranked(10) {
        writeln!(
            out,
            "  {word}  inplace {:>5}  across {:>5}  combined {:>5}",
            score.inplace,
            score.across,
            score.combined()
        )?;
    }
    Ok(())
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
