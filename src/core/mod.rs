//! Core domain types for the puzzle
//!
//! Words, per-letter feedback and the keyboard summary derived from it.
//! Everything here is pure: no I/O, no clock, no storage.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus, evaluate};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};

/// Guesses allowed per puzzle
pub const MAX_ATTEMPTS: usize = 6;
