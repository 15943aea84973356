//! Wordle Game - CLI
//!
//! Play Wordle in a terminal UI or a line-based CLI, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    dictionary::{DictionarySource, EmbeddedSource, FilteredSource, JsonFileSource},
    engine::{GameConfig, GuessEngine},
    logging::init_tracing,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON dictionary file mapping words to definitions (default: built-in)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Length of the hidden word
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Only pick targets without repeated letters
    #[arg(long, global = true)]
    unique_letters: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, target } => run_score_command(&guess, &target, cli.word_length),
    }
}

/// Build an engine from the CLI flags and select its first target
fn start_engine(cli: &Cli) -> Result<GuessEngine> {
    let config = GameConfig::new(cli.word_length, cli.max_attempts)?;
    let mut engine = match cli.seed {
        Some(seed) => GuessEngine::with_seed(config, seed),
        None => GuessEngine::new(config),
    };

    let source: Box<dyn DictionarySource> = match &cli.dictionary {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(EmbeddedSource),
    };
    let source = FilteredSource::new(source, cli.word_length).unique_letters(cli.unique_letters);

    engine.initialize(&source).context("could not start a game")?;
    Ok(engine)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let engine = start_engine(cli)?;
    run_tui(App::new(engine))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut engine = start_engine(cli)?;
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, target: &str, word_length: usize) -> Result<()> {
    let result = score_words(guess, target, word_length).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
