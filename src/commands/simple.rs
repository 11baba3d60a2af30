//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI

use crate::clock::DayNumber;
use crate::game::{GuessOutcome, PuzzleStateMachine};
use crate::output::{print_board, print_statistics};
use crate::share::DEFAULT_DECORATION;
use crate::storage::Storage;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Guess(String),
    Previous,
    Next,
    Today,
    Stats,
    Share,
    Help,
    Quit,
    Unknown(String),
}

/// Commands start with `/` so they never collide with five-letter guesses
fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Input::Guess(line.to_string());
    };

    match command.to_lowercase().as_str() {
        "prev" | "p" => Input::Previous,
        "next" | "n" => Input::Next,
        "today" | "t" => Input::Today,
        "stats" | "s" => Input::Stats,
        "share" => Input::Share,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("Type a five-letter word and press Enter to guess.");
    println!("Commands:");
    println!("  /prev, /next   move one day back or forward (up to 30 days back)");
    println!("  /today         jump to today's puzzle");
    println!("  /stats         show statistics");
    println!("  /share         print the share text of a finished puzzle");
    println!("  /quit          exit\n");
}

/// Run the line-oriented game loop
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Storage + ?Sized>(
    machine: &mut PuzzleStateMachine<'_, S>,
    earliest: DayNumber,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Lexi - Daily Word Puzzle                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(machine.session());

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_input(&line) {
            Input::Guess(word) if word.is_empty() => {}
            Input::Guess(word) => match machine.submit_guess(&word) {
                Ok(outcome) => {
                    print_board(machine.session());
                    if outcome.game_over {
                        announce_finish(machine, &outcome);
                    }
                }
                Err(err) => println!("❌ {err}\n"),
            },
            Input::Previous => {
                let target = machine.session().day_number().offset(-1);
                if target < earliest {
                    println!("Only the last 30 days can be replayed.\n");
                } else {
                    move_to(machine, target);
                }
            }
            Input::Next => {
                let target = machine.session().day_number().offset(1);
                move_to(machine, target);
            }
            Input::Today => {
                let today = machine.today();
                move_to(machine, today);
            }
            Input::Stats => print_statistics(&machine.statistics()),
            Input::Share => {
                if machine.session().game_over() {
                    println!("\n{}\n", machine.share_text(DEFAULT_DECORATION));
                } else {
                    println!("Finish the puzzle to share it.\n");
                }
            }
            Input::Help => print_help(),
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Unknown(command) => println!("Unknown command {command}; try /help\n"),
        }
    }
}

fn move_to<S: Storage + ?Sized>(machine: &mut PuzzleStateMachine<'_, S>, day: DayNumber) {
    match machine.navigate_to(day) {
        Ok(session) => print_board(session),
        Err(err) => println!("❌ {err}\n"),
    }
}

fn announce_finish<S: Storage + ?Sized>(machine: &PuzzleStateMachine<'_, S>, outcome: &GuessOutcome) {
    if let Some(message) = machine.celebration() {
        println!("\n{}", "═".repeat(70).bright_cyan());
        println!(
            "    🎉  {}  Solved in {} {}",
            message.bright_green().bold(),
            outcome.attempts_used.to_string().bright_cyan().bold(),
            if outcome.attempts_used == 1 { "guess" } else { "guesses" }
        );
        println!("{}", "═".repeat(70).bright_cyan());
    }
    print_statistics(&machine.statistics());
    println!("{}\n", machine.share_text(DEFAULT_DECORATION));
}

/// Prompt and read one line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
