//! Lexi
//!
//! A daily five-letter word puzzle: everyone gets the same word on the same
//! calendar day, six guesses to find it, and progress that persists between
//! runs.
//!
//! # Quick Start
//!
//! ```rust
//! use lexi::clock::DayNumber;
//! use lexi::game::PuzzleStateMachine;
//! use lexi::storage::MemoryStore;
//! use lexi::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut store = MemoryStore::new();
//! let mut machine = PuzzleStateMachine::new(&bank, &mut store, DayNumber::new(9788));
//!
//! let outcome = machine.submit_guess("crane").unwrap();
//! println!("{}", outcome.feedback.to_emoji());
//! ```

// Core domain types and guess evaluation
pub mod core;

// Calendar day numbering
pub mod clock;

// Word lists
pub mod wordlists;

// Daily word selection
pub mod daily;

// Puzzle sessions and the state machine
pub mod game;

// Lifetime statistics
pub mod stats;

// Persistence
pub mod storage;

pub mod share;

pub mod history;

pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
