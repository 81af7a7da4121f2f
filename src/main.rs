//! Reverse Wordle - CLI
//!
//! Rebuild a Wordle board from its colors, in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reverse_wordle::{
    commands::{run_simple, run_survey},
    output::print_survey_result,
    play::{Board, Difficulty},
    puzzle::{PuzzleConfig, Session},
    telemetry::init_tracing,
    wordlists::Dictionary,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "reverse_wordle",
    about = "Reverse Wordle: rebuild six hidden guess rows from their color feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list for solutions and scratch words (default: embedded list)
    #[arg(long, global = true)]
    all_words: Option<PathBuf>,

    /// Word list decoy rows are drawn from (default: embedded list)
    #[arg(long, global = true)]
    common_words: Option<PathBuf>,

    /// Most white tiles a decoy row may have before the cap is relaxed
    #[arg(long, global = true, default_value_t = PuzzleConfig::DEFAULT_MAX_WHITES)]
    max_whites: usize,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Difficulty: standard (3 tries per cell) or forgiving (5 tries)
    #[arg(short, long, global = true, default_value = "standard")]
    mode: String,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Generate many puzzles and report decoy sampling statistics
    Survey {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = Dictionary::load(cli.all_words.as_deref(), cli.common_words.as_deref())
        .context("failed to load word lists")?;

    let mut config = PuzzleConfig::new().with_max_whites(cli.max_whites);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let difficulty = Difficulty::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    info!(mode = difficulty.name(), "starting");

    match command {
        Commands::Play => run_play_command(dictionary, config, difficulty),
        Commands::Simple => run_simple_command(dictionary, config, difficulty),
        Commands::Survey { count } => {
            run_survey_command(&dictionary, &config, count);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: Dictionary,
    config: PuzzleConfig,
    difficulty: Difficulty,
) -> Result<()> {
    use reverse_wordle::interactive::{App, run_tui};

    let session = Session::new(dictionary, config);
    let board = Board::new(&session, difficulty).context("failed to generate a puzzle")?;
    run_tui(App::new(board))
}

fn run_simple_command(
    dictionary: Dictionary,
    config: PuzzleConfig,
    difficulty: Difficulty,
) -> Result<()> {
    let session = Session::new(dictionary, config);
    let mut board = Board::new(&session, difficulty).context("failed to generate a puzzle")?;
    run_simple(&mut board)
}

fn run_survey_command(dictionary: &Dictionary, config: &PuzzleConfig, count: usize) {
    println!("Generating {count} puzzles...");
    let result = run_survey(dictionary, config, count, true);
    print_survey_result(&result);
}
