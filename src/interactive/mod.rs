//! Interactive TUI
//!
//! Full-screen play with ratatui over crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
