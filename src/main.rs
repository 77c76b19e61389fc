//! Wordgame - CLI
//!
//! Five-letter word guessing game with TUI and line-based front-ends.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordgame::{
    clock::{
        DateAuthority, DateFile, DateResolution, FixedDate, LocalClock, parse_date_key,
        resolve_today,
    },
    commands::{reset_progress, run_simple, score_words, show_stats},
    config::{CONFIG_FILE, GameConfig},
    game::{ModeKind, Session},
    interactive::{App, run_tui},
    output::print_score,
    storage::{FileStore, KeyValueStore, MemoryStore, Storage},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Guess the five-letter word: daily puzzle, unlimited rounds and growth mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: wordgame.toml in the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answer list, one word per line
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Accepted-guess list, one word per line
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Directory for saved statistics and rounds
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// File holding today's date (YYYY-MM-DD), trusted over the local clock
    #[arg(long, global = true)]
    date_source: Option<PathBuf>,

    /// Play the daily puzzle of this date (YYYY-MM-DD), ignoring every clock
    #[arg(long, global = true, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// Starting mode: daily, infinite or growth
    #[arg(short, long, global = true)]
    mode: Option<ModeKind>,

    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    memory: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Show saved statistics
    Stats {
        /// Only this mode
        which: Option<ModeKind>,
    },

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Delete saved statistics and rounds
    Reset,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date_key(value).map_err(|e| e.to_string())
}

/// Logs go to stderr; the TUI owns the terminal, so it stays quiet unless
/// `RUST_LOG` asks otherwise
fn init_logging(verbose: u8, tui: bool) {
    let default_level = match (tui, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Config file first, command-line flags on top
fn resolve_config(cli: &Cli) -> GameConfig {
    let path = cli
        .config
        .clone()
        .or_else(|| cli.data_dir.as_ref().map(|dir| dir.join(CONFIG_FILE)));
    let mut config = GameConfig::load(path.as_deref());
    if let Some(path) = &cli.answers {
        config.answers = Some(path.clone());
    }
    if let Some(path) = &cli.guesses {
        config.guesses = Some(path.clone());
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(path) = &cli.date_source {
        config.date_source = Some(path.clone());
    }
    if cli.date.is_some() {
        config.date = cli.date;
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let config = resolve_config(&cli);

    if cli.memory {
        run_command(command, &config, Storage::new(MemoryStore::new()))
    } else {
        info!(dir = %config.data_dir.display(), "using saved state");
        run_command(command, &config, Storage::new(FileStore::new(&config.data_dir)))
    }
}

fn run_command<S: KeyValueStore>(
    command: Commands,
    config: &GameConfig,
    mut storage: Storage<S>,
) -> Result<()> {
    match command {
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target)?;
            print_score(&result.guess, &result.target, result.pattern);
        }
        Commands::Stats { which } => {
            show_stats(&storage, which);
        }
        Commands::Reset => {
            reset_progress(&mut storage);
            println!("Saved progress cleared.");
        }
        Commands::Play => {
            let (session, clock) = open_session(config, storage);
            run_tui(App::new(session, clock))?;
        }
        Commands::Simple => {
            let (mut session, clock) = open_session(config, storage);
            run_simple(&mut session, clock.as_ref())?;
        }
    }
    Ok(())
}

fn open_session<S: KeyValueStore>(
    config: &GameConfig,
    storage: Storage<S>,
) -> (Session<S, rand::rngs::ThreadRng>, Box<dyn DateAuthority>) {
    let load = WordBank::load(config.answers.as_deref(), config.guesses.as_deref());

    let (clock, today): (Box<dyn DateAuthority>, DateResolution) =
        match (config.date, &config.date_source) {
            // A pinned date is a plain override, not a trusted source
            (Some(date), _) => (
                Box::new(FixedDate(date)),
                DateResolution {
                    date,
                    fell_back: false,
                },
            ),
            (None, Some(path)) => {
                let source = DateFile::new(path);
                let today = resolve_today(Some(&source));
                (Box::new(source), today)
            }
            (None, None) => (Box::new(LocalClock), resolve_today(None)),
        };
    if today.fell_back {
        warn!(date = %today.date, "date source unavailable, playing by the local date");
    }

    let session = Session::launch(load, storage, today, rand::rng(), config.mode);
    (session, clock)
}
