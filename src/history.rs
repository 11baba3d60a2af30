//! Month-at-a-glance view of past puzzles

use crate::clock::DayNumber;
use crate::game::{Outcome, Phase};
use crate::storage::Storage;
use chrono::{Datelike, NaiveDate};
use log::warn;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Won,
    Lost,
    /// Guesses made but not finished
    InProgress,
    Unplayed,
    /// After today; cannot be opened
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub day: DayNumber,
    pub state: DayState,
    pub guesses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("{year}-{month:02} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },
}

/// State of every calendar day in `month` of `year`
///
/// Unreadable sessions are reported as unplayed.
///
/// # Errors
///
/// Returns [`HistoryError::InvalidMonth`] if `month` is not in `1..=12` or the
/// year is out of range.
pub fn month_overview<S: Storage + ?Sized>(
    store: &S,
    year: i32,
    month: u32,
    today: DayNumber,
) -> Result<Vec<DayOverview>, HistoryError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(HistoryError::InvalidMonth { year, month })?;

    Ok(first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| overview_for(store, date, today))
        .collect())
}

fn overview_for<S: Storage + ?Sized>(store: &S, date: NaiveDate, today: DayNumber) -> DayOverview {
    let day = DayNumber::from_date(date);
    if day > today {
        return DayOverview {
            date,
            day,
            state: DayState::Future,
            guesses: 0,
        };
    }

    let session = store.get_session(day).unwrap_or_else(|err| {
        warn!("Failed to read session for day {day}: {err}");
        None
    });

    let (state, guesses) = match session {
        None => (DayState::Unplayed, 0),
        Some(session) => {
            let count = session.guesses().len();
            let state = match session.phase() {
                Phase::Finished(Outcome::Won) => DayState::Won,
                Phase::Finished(Outcome::Lost) => DayState::Lost,
                Phase::Active if count == 0 => DayState::Unplayed,
                Phase::Active => DayState::InProgress,
            };
            (state, count)
        }
    };

    DayOverview {
        date,
        day,
        state,
        guesses,
    }
}
