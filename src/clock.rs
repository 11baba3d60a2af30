//! Calendar day numbering
//!
//! Every puzzle is identified by its day number: whole local calendar days
//! elapsed since 1999-12-31, so 2000-01-01 is day 1. The epoch is part of the
//! persisted data format and must never change.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days from 0001-01-01 (CE day 1) to the epoch 1999-12-31
const EPOCH_DAYS_FROM_CE: i64 = 730_119;

/// Puzzle identity: days since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayNumber(i64);

impl DayNumber {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Day number of a calendar date
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use lexi::clock::DayNumber;
    ///
    /// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// assert_eq!(DayNumber::from_date(date).value(), 1);
    /// ```
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE)
    }

    /// Day number of the local calendar day containing `instant`
    ///
    /// Time of day is discarded.
    #[must_use]
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_date(instant.date_naive())
    }

    /// Day number for the current local date
    #[must_use]
    pub fn today() -> Self {
        Self::of(&Local::now())
    }

    /// Calendar date of this day number
    ///
    /// Saturates at chrono's representable range instead of panicking.
    #[must_use]
    pub fn to_date(self) -> NaiveDate {
        self.0
            .checked_add(EPOCH_DAYS_FROM_CE)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(if self.0 < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            })
    }

    /// Human-readable date, e.g. `October 18, 2026`
    #[must_use]
    pub fn format(self) -> String {
        self.to_date().format("%B %-d, %Y").to_string()
    }

    /// Day `delta` days away from this one
    #[must_use]
    pub const fn offset(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Whole days from `earlier` to `self`, saturating at the `i64` bounds
    #[must_use]
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
