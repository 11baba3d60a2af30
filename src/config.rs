//! Runtime configuration shared by the binary's hosts

use crate::clock::DayNumber;
use crate::storage::JsonFileStore;
use crate::wordlists::{WordBank, loader::load_from_file};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// How many days before today a host lets the player revisit
pub const HISTORY_WINDOW_DAYS: i64 = 30;

const APP_DIR: &str = "lexi";

#[derive(Debug, Error)]
#[error("'{0}' is neither a YYYY-MM-DD date nor a day number")]
pub struct DayParseError(String);

/// Parse a day given as `YYYY-MM-DD` or as a raw day number
///
/// # Errors
///
/// Returns [`DayParseError`] if `input` is neither.
pub fn parse_day(input: &str) -> Result<DayNumber, DayParseError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(DayNumber::from_date(date));
    }
    input
        .parse::<i64>()
        .map(DayNumber::new)
        .map_err(|_| DayParseError(input.to_string()))
}

/// Parse `YYYY-MM` into a year and month
#[must_use]
pub fn parse_month(input: &str) -> Option<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d").ok()?;
    Some((date.year(), date.month()))
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub today: DayNumber,
    /// Replacement word list; the embedded one is used when absent
    pub wordlist: Option<PathBuf>,
}

impl Config {
    /// Fill unset values from the environment and the local clock
    #[must_use]
    pub fn resolve(data_dir: Option<PathBuf>, today: Option<DayNumber>, wordlist: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| {
            default_data_dir(std::env::var_os("XDG_DATA_HOME"), std::env::var_os("HOME"))
        });
        Self {
            data_dir,
            today: today.unwrap_or_else(DayNumber::today),
            wordlist,
        }
    }

    /// Word bank from the configured list
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read or contains invalid words.
    pub fn load_bank(&self) -> Result<WordBank> {
        match &self.wordlist {
            Some(path) => {
                let bank = load_from_file(path)?;
                info!("Loaded {} words from {}", bank.len(), path.display());
                Ok(bank)
            }
            None => WordBank::embedded().context("Embedded word list is invalid"),
        }
    }

    #[must_use]
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir)
    }

    /// Oldest day a host offers for replay
    #[must_use]
    pub const fn earliest_day(&self) -> DayNumber {
        self.today.offset(-HISTORY_WINDOW_DAYS)
    }
}

/// `$XDG_DATA_HOME/lexi`, else `$HOME/.local/share/lexi`, else `./.lexi`
fn default_data_dir(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let non_empty = |value: Option<OsString>| value.filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(base) = non_empty(xdg_data_home) {
        return base.join(APP_DIR);
    }
    if let Some(home) = non_empty(home) {
        return home.join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(format!(".{APP_DIR}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_numbers() {
        assert_eq!(parse_day("2026-10-18").unwrap(), DayNumber::new(9788));
        assert_eq!(parse_day("2000-01-01").unwrap(), DayNumber::new(1));
        assert_eq!(parse_day("9788").unwrap(), DayNumber::new(9788));
        assert_eq!(parse_day(" -3 ").unwrap(), DayNumber::new(-3));
        assert!(parse_day("yesterday").is_err());
        assert!(parse_day("2026-13-01").is_err());
    }

    #[test]
    fn parses_months() {
        assert_eq!(parse_month("2026-10"), Some((2026, 10)));
        assert_eq!(parse_month(" 2000-01 "), Some((2000, 1)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("october"), None);
    }

    #[test]
    fn data_dir_prefers_xdg() {
        let dir = default_data_dir(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/xdg/lexi"));
    }

    #[test]
    fn data_dir_falls_back_to_home_then_cwd() {
        assert_eq!(
            default_data_dir(None, Some("/home/me".into())),
            PathBuf::from("/home/me/.local/share/lexi")
        );
        assert_eq!(
            default_data_dir(Some(OsString::new()), None),
            PathBuf::from(".lexi")
        );
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::resolve(
            Some(PathBuf::from("/tmp/lexi-data")),
            Some(DayNumber::new(9788)),
            None,
        );
        assert_eq!(config.data_dir, PathBuf::from("/tmp/lexi-data"));
        assert_eq!(config.today, DayNumber::new(9788));
        assert_eq!(config.earliest_day(), DayNumber::new(9758));
        assert_eq!(config.store().data_dir(), config.data_dir.as_path());
    }

    #[test]
    fn embedded_bank_loads_by_default() {
        let config = Config::resolve(Some(PathBuf::from("/unused")), Some(DayNumber::new(1)), None);
        let bank = config.load_bank().unwrap();
        assert!(bank.contains("crane"));
    }
}
