//! Aggregate letter state for the on-screen keyboard

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;

/// Best status seen for each letter across all guesses of a game
///
/// A letter that was ever `Correct` stays `Correct`; `Present` beats
/// `Absent`. Letters that were never guessed have no status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterStatus>; 26],
}

impl KeyboardState {
    /// Build the state for `guesses` played against `target`
    #[must_use]
    pub fn from_guesses<'w>(guesses: impl IntoIterator<Item = &'w Word>, target: &Word) -> Self {
        let mut state = Self::default();
        for guess in guesses {
            state.apply(guess, &Feedback::evaluate(guess, target));
        }
        state
    }

    /// Fold one evaluated guess into the state
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            *slot = Some(slot.map_or(status, |seen| seen.max(status)));
        }
    }

    /// Status of a letter, if it has been guessed
    ///
    /// Accepts either case; non-letters have no status.
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[letter as usize - 'a' as usize]
        } else {
            None
        }
    }
}
