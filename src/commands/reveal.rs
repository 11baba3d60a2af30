//! Word reveal command

use crate::clock::DayNumber;
use crate::core::Word;
use crate::daily::DailyWordSelector;
use crate::storage::Storage;
use crate::wordlists::WordBank;
use anyhow::{Result, bail};
use log::warn;

/// A day and its puzzle word
pub struct RevealResult {
    pub day: DayNumber,
    pub word: Word,
}

/// Puzzle word of a past day
///
/// Today's word is only revealed once today's puzzle is finished.
///
/// # Errors
///
/// Returns an error for future days and for an unfinished today.
pub fn reveal_word<S: Storage + ?Sized>(
    bank: &WordBank,
    store: &S,
    day: DayNumber,
    today: DayNumber,
) -> Result<RevealResult> {
    if day > today {
        bail!("Day {day} ({}) has not happened yet", day.format());
    }
    if day == today {
        let finished = store
            .get_session(day)
            .unwrap_or_else(|err| {
                warn!("Failed to read today's session: {err}");
                None
            })
            .is_some_and(|session| session.game_over());
        if !finished {
            bail!("Finish today's puzzle before revealing its word");
        }
    }

    let word = DailyWordSelector::new(bank).word_for_day(day).clone();
    Ok(RevealResult { day, word })
}
