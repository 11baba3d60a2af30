//! Persisted per-day puzzle state

use crate::clock::DayNumber;
use crate::core::{Feedback, MAX_ATTEMPTS, Word};
use serde::{Deserialize, Serialize};

/// How a finished puzzle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle of a loaded puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting guesses
    Active,
    /// Terminal; no further guesses are accepted
    Finished(Outcome),
}

/// One day's puzzle: its target and the guesses made so far
///
/// Serialized with camelCase keys (`dayNumber`, `targetWord`, `guesses`,
/// `gameOver`, `hasWon`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSession {
    day_number: DayNumber,
    target_word: Word,
    #[serde(default)]
    guesses: Vec<Word>,
    #[serde(default)]
    game_over: bool,
    #[serde(default)]
    has_won: bool,
}

impl PuzzleSession {
    /// Fresh session with no guesses
    #[must_use]
    pub const fn new(day_number: DayNumber, target_word: Word) -> Self {
        Self {
            day_number,
            target_word,
            guesses: Vec::new(),
            game_over: false,
            has_won: false,
        }
    }

    #[must_use]
    pub const fn day_number(&self) -> DayNumber {
        self.day_number
    }

    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target_word
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.game_over, self.has_won) {
            (false, _) => Phase::Active,
            (true, true) => Phase::Finished(Outcome::Won),
            (true, false) => Phase::Finished(Outcome::Lost),
        }
    }

    /// Guesses still available
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Whether `word` was already guessed
    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.guesses.iter().any(|guess| guess.text() == word)
    }

    /// Feedback for every guess, in order
    #[must_use]
    pub fn feedback_rows(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::evaluate(guess, &self.target_word))
            .collect()
    }

    /// Append an accepted guess and update the terminal flags
    ///
    /// Returns the guess's feedback. Callers validate first; this only
    /// enforces the state transition.
    pub(crate) fn push_guess(&mut self, guess: Word) -> Feedback {
        let feedback = Feedback::evaluate(&guess, &self.target_word);
        self.guesses.push(guess);

        if feedback.is_solved() {
            self.has_won = true;
            self.game_over = true;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.game_over = true;
        }

        feedback
    }
}
