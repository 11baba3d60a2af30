//! Lexi - CLI
//!
//! Daily word puzzle with TUI and line modes.

use anyhow::{Context, Result, anyhow};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use lexi::{
    clock::DayNumber,
    commands::{evaluate_pair, reveal_word, run_simple, share_for_day},
    config::{Config, parse_day, parse_month},
    game::PuzzleStateMachine,
    history::month_overview,
    output::{print_evaluation, print_history, print_reveal, print_statistics},
    share::DEFAULT_DECORATION,
    storage::{JsonFileStore, Storage},
};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexi",
    about = "Daily five-letter word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved progress and statistics
    #[arg(long, global = true, env = "LEXI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Play as if today were this day (YYYY-MM-DD or day number)
    #[arg(long, global = true, env = "LEXI_TODAY", value_parser = parse_day)]
    today: Option<DayNumber>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "LEXI_WORDLIST")]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show lifetime statistics
    Stats,

    /// Print the share text of a finished puzzle
    Share {
        /// Day to share (YYYY-MM-DD or day number; default: today)
        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayNumber>,
    },

    /// Show a month of results as a calendar
    History {
        /// Month as YYYY-MM (default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Reveal the word of a past day
    Word {
        /// Day to reveal (YYYY-MM-DD or day number)
        #[arg(short, long, value_parser = parse_day)]
        day: DayNumber,
    },

    /// Score a guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Delete all saved progress and statistics
    Reset,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.today, cli.wordlist);
    debug!("Using {config:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Stats => run_stats_command(&config),
        Commands::Share { day } => run_share_command(&config, day.unwrap_or(config.today)),
        Commands::History { month } => run_history_command(&config, month.as_deref()),
        Commands::Word { day } => run_word_command(&config, day),
        Commands::Evaluate { guess, target } => {
            let result = evaluate_pair(&guess, &target)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Reset => run_reset_command(&config),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use lexi::interactive::{App, run_tui};

    let bank = config.load_bank()?;
    let mut store = config.store();
    let machine = PuzzleStateMachine::new(&bank, &mut store, config.today);
    run_tui(App::new(machine, config.earliest_day()))
}

fn run_simple_command(config: &Config) -> Result<()> {
    let bank = config.load_bank()?;
    let mut store = config.store();
    let mut machine = PuzzleStateMachine::new(&bank, &mut store, config.today);
    run_simple(&mut machine, config.earliest_day())
}

fn run_stats_command(config: &Config) -> Result<()> {
    let store = config.store();
    let stats = store
        .get_statistics()
        .with_context(|| format!("Failed to read statistics from {}", store.data_dir().display()))?
        .unwrap_or_default();
    print_statistics(&stats);
    Ok(())
}

fn run_share_command(config: &Config, day: DayNumber) -> Result<()> {
    let text = share_for_day(&config.store(), day, DEFAULT_DECORATION)?;
    println!("{text}");
    Ok(())
}

fn run_history_command(config: &Config, month: Option<&str>) -> Result<()> {
    let (year, month) = match month {
        Some(text) => parse_month(text).ok_or_else(|| anyhow!("'{text}' is not a YYYY-MM month"))?,
        None => {
            let date = config.today.to_date();
            (date.year(), date.month())
        }
    };

    let overview = month_overview(&config.store(), year, month, config.today)?;
    print_history(&overview);
    Ok(())
}

fn run_word_command(config: &Config, day: DayNumber) -> Result<()> {
    let bank = config.load_bank()?;
    let result = reveal_word(&bank, &config.store(), day, config.today)?;
    print_reveal(&result);
    Ok(())
}

fn run_reset_command(config: &Config) -> Result<()> {
    let mut store: JsonFileStore = config.store();
    store
        .clear()
        .with_context(|| format!("Failed to clear {}", store.data_dir().display()))?;
    info!("Cleared saved data in {}", store.data_dir().display());
    println!("All saved progress and statistics have been deleted.");
    Ok(())
}
