//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use crate::history::DayState;
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as five colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| letter_tile(letter, status).to_string())
        .collect()
}

/// Placeholder for a row not guessed yet, one slot per letter
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(WORD_LENGTH)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Calendar cell marker for a day's state
#[must_use]
pub const fn day_state_marker(state: DayState) -> char {
    match state {
        DayState::Won => '✓',
        DayState::Lost => '✗',
        DayState::InProgress => '…',
        DayState::Unplayed => '·',
        DayState::Future => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(3.0, 6.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn row_keeps_letter_order() {
        colored::control::set_override(false);
        let guess = Word::new("hello").unwrap();
        let target = Word::new("allow").unwrap();
        let row = colored_row(&guess, &Feedback::evaluate(&guess, &target));
        assert_eq!(row, " H  E  L  L  O ");
    }

    #[test]
    fn empty_row_matches_tile_width() {
        colored::control::set_override(false);
        let guess = Word::new("hello").unwrap();
        let row = colored_row(&guess, &Feedback::evaluate(&guess, &guess));
        assert_eq!(empty_row().chars().count(), row.chars().count());
        assert_eq!(empty_row().matches('_').count(), WORD_LENGTH);
    }

    #[test]
    fn markers_are_distinct() {
        let states = [
            DayState::Won,
            DayState::Lost,
            DayState::InProgress,
            DayState::Unplayed,
            DayState::Future,
        ];
        let markers: rustc_hash::FxHashSet<char> =
            states.into_iter().map(day_state_marker).collect();
        assert_eq!(markers.len(), states.len());
    }
}
