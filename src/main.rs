//! Hangman - CLI
//!
//! Hangman with TUI and simple text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    output::{Gallows, print_categories},
    wordlists::{WordRepository, loader},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word data file with `CATEGORY,word1,word2,...` lines (default: built-in list)
    #[arg(short, long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Seed for reproducible word draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Gallows frames file, frames separated by `---` lines (default: built-in art)
    #[arg(short, long, global = true, value_name = "FILE")]
    art: Option<PathBuf>,

    /// Log file (the terminal belongs to the game)
    #[arg(long, global = true, value_name = "FILE", default_value = "hangman.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List the loaded categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let repository = load_repository(cli.data.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let gallows = Gallows::load_or_default(cli.art.as_deref());
            let app = App::new(&repository, gallows, make_rng(cli.seed));
            run_tui(app)
        }
        Commands::Simple => {
            let gallows = Gallows::load_or_default(cli.art.as_deref());
            let mut rng = make_rng(cli.seed);
            let summary = run_simple(&repository, &gallows, &mut rng)?;
            info!(games = summary.games, won = summary.wins, "simple mode finished");
            Ok(())
        }
        Commands::Categories => {
            print_categories(&mut io::stdout(), &repository)?;
            Ok(())
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

/// Load the word data; any problem here is fatal
fn load_repository(path: Option<&Path>) -> Result<WordRepository> {
    let repository = match path {
        Some(path) => loader::load_from_file(path),
        None => loader::embedded(),
    }
    .context("cannot start without word data")?;

    info!(
        categories = repository.category_count(),
        words = repository.word_count(),
        "word data ready"
    );
    Ok(repository)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded word draws");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}
