//! Share command
//!
//! Builds the emoji summary of a finished day from stored progress.

use crate::clock::DayNumber;
use crate::share::build_share_text;
use crate::storage::Storage;
use anyhow::{Context, Result, bail};

/// Share text for a finished day
///
/// # Errors
///
/// Returns an error if the session cannot be read, was never played, or is
/// still in progress.
pub fn share_for_day<S: Storage + ?Sized>(store: &S, day: DayNumber, decoration: &str) -> Result<String> {
    let Some(session) = store
        .get_session(day)
        .with_context(|| format!("Failed to read the puzzle for day {day}"))?
    else {
        bail!("No puzzle has been played for {}", day.format());
    };

    if !session.game_over() {
        bail!("The puzzle for {} is not finished yet", day.format());
    }

    Ok(build_share_text(
        day,
        session.guesses(),
        session.target_word(),
        decoration,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PuzzleStateMachine;
    use crate::share::DEFAULT_DECORATION;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordBank;

    const TODAY: DayNumber = DayNumber::new(9788);

    #[test]
    fn shares_only_finished_days() {
        let bank = WordBank::new(["allow", "allot", "lowly", "crane", "slate", "fuzzy", "ghost", "eagle"])
            .unwrap();
        let mut store = MemoryStore::new();
        assert!(share_for_day(&store, TODAY, DEFAULT_DECORATION).is_err());

        {
            let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
            let target = machine.session().target_word().text().to_string();
            let miss = if target == "crane" { "slate" } else { "crane" };
            machine.submit_guess(miss).unwrap();
        }
        assert!(share_for_day(&store, TODAY, DEFAULT_DECORATION).is_err());

        let target = store.get_session(TODAY).unwrap().unwrap().target_word().text().to_string();
        {
            let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
            machine.submit_guess(&target).unwrap();
        }

        let text = share_for_day(&store, TODAY, DEFAULT_DECORATION).unwrap();
        assert!(text.starts_with("🎯 October 18, 2026 2/6"));
        assert!(text.ends_with("🟩🟩🟩🟩🟩"));
    }
}
