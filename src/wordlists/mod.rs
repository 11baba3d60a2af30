//! Word bank for the daily puzzle
//!
//! The embedded list is compiled into the binary; custom lists can be loaded
//! from a file. One list serves as both the pool of daily targets and the
//! dictionary of accepted guesses.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError, index_for_unit};
pub use embedded::{WORDS, WORDS_COUNT};
