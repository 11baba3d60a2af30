//! Lifetime statistics and streaks
//!
//! A single global record folded from completed days. Each day counts once,
//! the first time its puzzle finishes.

use crate::clock::DayNumber;
use crate::core::MAX_ATTEMPTS;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Aggregate results across all played days
///
/// Serialized with camelCase keys; missing fields default to zero so older
/// records without `completedDays` still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// Index `i` counts wins that took `i + 1` guesses
    pub guess_distribution: [u32; MAX_ATTEMPTS],
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_played_day: Option<DayNumber>,
    /// Days already folded in
    pub completed_days: BTreeSet<DayNumber>,
}

impl Statistics {
    /// Fold a finished day into the statistics
    ///
    /// Returns `false` and changes nothing if `day` was already recorded.
    ///
    /// Streaks compare against the latest completed day before `day`, not
    /// the order days were played in: a win continues the streak when that
    /// day is `day - 1` (or there is none), and restarts it at 1 after a gap.
    /// A loss always resets the streak to 0.
    pub fn record(&mut self, day: DayNumber, has_won: bool, guess_count: usize) -> bool {
        if self.completed_days.contains(&day) {
            debug!("Day {day} already recorded; statistics unchanged");
            return false;
        }

        let previous = self.completed_days.range(..day).next_back().copied();
        self.completed_days.insert(day);

        if has_won {
            self.current_streak = match previous {
                Some(prev) if day.days_since(prev) > 1 => 1,
                _ => self.current_streak + 1,
            };
        } else {
            self.current_streak = 0;
        }

        self.games_played += 1;
        if has_won {
            self.games_won += 1;
            if let Some(slot) = guess_count
                .checked_sub(1)
                .and_then(|index| self.guess_distribution.get_mut(index))
            {
                *slot += 1;
            }
        }

        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_played_day = Some(day);

        debug!(
            "Recorded day {day} (won: {has_won}, guesses: {guess_count}); streak {}",
            self.current_streak
        );
        true
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Share of games won, as a whole percentage rounded to nearest
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Largest bucket of the guess distribution
    #[must_use]
    pub fn max_distribution(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}
