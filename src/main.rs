//! Wordle Hard-Mode Solver - CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::prelude::IndexedRandom;
use std::io;
use wordle_hardmode::{
    commands::{run_assist, run_benchmark, run_play, solve_word},
    config::{DEFAULT_MAX_GUESSES, SessionConfig, WordListSource},
    core::Word,
    game::Game,
    output::{print_benchmark_result, print_solve_result},
    solver::{CandidateEngine, RankingMode},
    wordlists::{filter_length, load},
};

#[derive(Parser)]
#[command(
    name = "wordle_hardmode",
    about = "Hard-mode Wordle solver ranking candidates by letter frequency",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Ranking: across (default), inplace, combined
    #[arg(short, long, global = true, default_value = "across")]
    ranking: RankingMode,

    /// Word length when no hidden word is given
    #[arg(short = 'n', long, global = true)]
    letters: Option<usize>,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a game you are playing (default)
    Assist,

    /// Let the solver play against a hidden word
    Solve {
        /// Hidden word (random from the word list if omitted)
        word: Option<String>,
    },

    /// Play a game yourself
    Play {
        /// Hidden word (random from the word list if omitted)
        word: Option<String>,
    },

    /// Run the solver against every word in the list
    Benchmark {
        /// Only test the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig {
        word_list: WordListSource::from_arg(&cli.wordlist),
        n_letters: cli.letters,
        ranking: cli.ranking,
        max_guesses: cli.max_guesses,
    };
    let words = load(&config.word_list)
        .with_context(|| format!("loading word list '{}'", config.word_list))?;

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist_command(&config, &words),
        Commands::Solve { word } => run_solve_command(&config, &words, word.as_deref(), cli.verbose),
        Commands::Play { word } => run_play_command(&config, &words, word.as_deref()),
        Commands::Benchmark { limit } => {
            run_benchmark_command(&config, &words, limit);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Hidden word from the command line, or a random pick of the right length
///
/// A word given on the command line must be in the word list.
fn hidden_word(config: &SessionConfig, words: &[Word], word: Option<&str>) -> Result<Word> {
    if let Some(text) = word {
        let hidden = Word::new(text).with_context(|| format!("invalid hidden word '{text}'"))?;
        if !words.contains(&hidden) {
            bail!("'{hidden}' is not in the word list");
        }
        return Ok(hidden);
    }

    let n_letters = config.letters_for(None);
    let pool = filter_length(words, n_letters);
    pool.choose(&mut rand::rng())
        .cloned()
        .with_context(|| format!("word list has no {n_letters}-letter words"))
}

fn run_assist_command(config: &SessionConfig, words: &[Word]) -> Result<()> {
    let mut engine =
        CandidateEngine::new(words.iter().cloned(), config.letters_for(None), config.ranking);
    run_assist(&mut engine, io::stdin().lock(), io::stdout())
}

fn run_solve_command(
    config: &SessionConfig,
    words: &[Word],
    word: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let hidden = hidden_word(config, words, word)?;
    let mut engine = CandidateEngine::new(
        words.iter().cloned(),
        config.letters_for(Some(&hidden)),
        config.ranking,
    );
    let mut game = Game::new(hidden, config.max_guesses);
    let result = solve_word(&mut engine, &mut game)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(config: &SessionConfig, words: &[Word], word: Option<&str>) -> Result<()> {
    let hidden = hidden_word(config, words, word)?;
    let dictionary = filter_length(words, hidden.len());
    let mut game = Game::new(hidden, config.max_guesses);

    run_play(&mut game, &dictionary, io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn run_benchmark_command(config: &SessionConfig, words: &[Word], limit: Option<usize>) {
    let n_letters = config.letters_for(None);
    let base = CandidateEngine::new(words.iter().cloned(), n_letters, config.ranking);
    let targets: Vec<Word> = base
        .pool()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    println!(
        "Running benchmark on {} words ({} ranking, {} guesses)...",
        targets.len(),
        config.ranking,
        config.max_guesses
    );
    let result = run_benchmark(&base, &targets, config.max_guesses, true);
    print_benchmark_result(&result);
}
