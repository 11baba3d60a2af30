//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_evaluation, print_history, print_reveal, print_statistics,
};
