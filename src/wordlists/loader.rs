//! Word list loading utilities
//!
//! Reads a custom word bank from a file, one word per line.

use super::WordBank;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a word bank from a file
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Order is
/// preserved: it decides which word each day gets.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if the words do not form a
/// valid bank (bad entry, duplicate, empty file).
///
/// # Examples
/// ```no_run
/// use lexi::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    words_from_str(&content).with_context(|| format!("Invalid word list {}", path.display()))
}

/// Build a bank from newline-separated text
///
/// # Errors
///
/// Returns an error if the words do not form a valid bank.
pub fn words_from_str(content: &str) -> Result<WordBank> {
    let words = content.lines().map(str::trim).filter(|line| !line.is_empty());
    Ok(WordBank::new(words)?)
}
