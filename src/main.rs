//! Wordle - CLI
//!
//! Play Wordle in the terminal, as a full TUI or as a simple line-based game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{run_check, run_simple},
    config::GameConfig,
    interactive::{App, run_tui},
    logging::init_tracing,
    output::print_words_summary,
    wordlists::WordListLocation,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default), 'url' (the online list), a URL, or a path to a file
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS", default_value = "embedded")]
    words: WordListLocation,

    /// Seed for answer selection (random when omitted)
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "WORDLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a guess against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to check against
        answer: String,
    },

    /// Show word list details
    Words,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            words: self.words.clone(),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(
        config.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;
    info!(words = %config.words, seed = ?config.seed, "starting");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, answer } => run_check(&guess, &answer),
        Commands::Words => {
            run_words_command(&config);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let source = config.load_source(&mut rng);
    run_tui(App::new(source, rng))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let source = config.load_source(&mut rng);
    run_simple(source, &mut rng)
}

fn run_words_command(config: &GameConfig) {
    let mut rng = config.rng();
    let source = config.load_source(&mut rng);
    print_words_summary(&source, &config.words.to_string());
}
