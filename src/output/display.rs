//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, day_state_marker, empty_row};
use crate::commands::{EvaluationResult, RevealResult};
use crate::core::MAX_ATTEMPTS;
use crate::game::{Outcome, Phase, PuzzleSession};
use crate::history::{DayOverview, DayState};
use crate::stats::Statistics;
use chrono::Datelike;
use colored::Colorize;

/// Print lifetime statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.games_played.to_string().bright_white().bold());
    println!("   Win %:           {}", stats.win_percentage().to_string().bright_yellow().bold());
    println!("   Current streak:  {}", stats.current_streak.to_string().green());
    println!("   Max streak:      {}", stats.max_streak.to_string().green());

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_distribution().max(1));
    for (index, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 40);
        println!("   {}: {} {count:4}", index + 1, bar.green());
    }
    println!();
}

/// Print a session's board: one colored row per guess plus empty slots
pub fn print_board(session: &PuzzleSession) {
    let day = session.day_number();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle for {} (day {day})", day.format().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (guess, feedback) in session.guesses().iter().zip(session.feedback_rows()) {
        println!("  {}", colored_row(guess, &feedback));
    }
    for _ in session.guesses().len()..MAX_ATTEMPTS {
        println!("  {}", empty_row().bright_black());
    }

    match session.phase() {
        Phase::Active => println!("\n{} attempts left", session.attempts_left()),
        Phase::Finished(Outcome::Won) => println!(
            "\n{}",
            format!("✅ Solved in {}/{MAX_ATTEMPTS}", session.guesses().len())
                .green()
                .bold()
        ),
        Phase::Finished(Outcome::Lost) => println!(
            "\n{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            session.target_word().text().to_uppercase().bright_white().bold()
        ),
    }
}

/// Print a month as a Sunday-first calendar
pub fn print_history(month: &[DayOverview]) {
    let Some(first) = month.first() else {
        return;
    };

    println!("\n{}", "═".repeat(36).cyan());
    println!(" {} ", first.date.format("%B %Y").to_string().bright_cyan().bold());
    println!("{}", "═".repeat(36).cyan());
    println!("  Su   Mo   Tu   We   Th   Fr   Sa");

    let lead = first.date.weekday().num_days_from_sunday() as usize;
    let mut line = "     ".repeat(lead);
    for entry in month {
        line.push_str(&format!(" {}", calendar_cell(entry)));
        if entry.date.weekday().num_days_from_sunday() == 6 {
            println!("{line}");
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{line}");
    }

    let count = |state: DayState| month.iter().filter(|entry| entry.state == state).count();
    println!(
        "\n  {} won  {} lost  {} in progress",
        count(DayState::Won).to_string().green(),
        count(DayState::Lost).to_string().red(),
        count(DayState::InProgress).to_string().yellow()
    );
}

fn calendar_cell(entry: &DayOverview) -> String {
    let marker = day_state_marker(entry.state);
    let cell = format!("{:>2}{marker} ", entry.date.day());
    match entry.state {
        DayState::Won => cell.green().to_string(),
        DayState::Lost => cell.red().to_string(),
        DayState::InProgress => cell.yellow().to_string(),
        DayState::Unplayed => cell,
        DayState::Future => cell.bright_black().to_string(),
    }
}

/// Print a revealed puzzle word
pub fn print_reveal(result: &RevealResult) {
    println!(
        "The word for {} (day {}) is {}",
        result.day.format().bright_yellow(),
        result.day,
        result.word.text().to_uppercase().bright_white().bold()
    );
}

/// Print a single evaluation
pub fn print_evaluation(result: &EvaluationResult) {
    println!(
        "\n  {}  {}",
        colored_row(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "  {} vs {}",
        result.guess.text().to_uppercase().bright_white(),
        result.target.text().to_uppercase().bright_white()
    );
}
