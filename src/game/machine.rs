use super::session::{Outcome, Phase, PuzzleSession};
use crate::clock::DayNumber;
use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use crate::daily::{DailyWordSelector, win_celebration_text};
use crate::share::build_share_text;
use crate::stats::Statistics;
use crate::storage::Storage;
use crate::wordlists::WordBank;
use log::{debug, info, warn};
use thiserror::Error;

/// Why a guess was rejected; the session is untouched in every case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the puzzle for day {0} is already finished")]
    GameOver(DayNumber),
    #[error("guesses must be {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("'{0}' was already guessed")]
    DuplicateGuess(String),
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("day {requested} is in the future (today is day {today})")]
    FutureDay {
        requested: DayNumber,
        today: DayNumber,
    },
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub game_over: bool,
    pub has_won: bool,
    pub attempts_used: usize,
}

/// Drives one player's puzzle for a selected day
///
/// The machine is always loaded: construction restores or creates today's
/// session, and [`navigate_to`](Self::navigate_to) swaps in another day.
/// `today` is fixed for the machine's lifetime; there is no rollover at
/// midnight.
///
/// Storage is best-effort. Failed reads count as "nothing stored" and failed
/// writes are logged, so play always continues.
pub struct PuzzleStateMachine<'a, S: Storage + ?Sized> {
    selector: DailyWordSelector<'a>,
    store: &'a mut S,
    today: DayNumber,
    session: PuzzleSession,
}

impl<'a, S: Storage + ?Sized> PuzzleStateMachine<'a, S> {
    /// Machine positioned on `today`'s puzzle
    pub fn new(bank: &'a WordBank, store: &'a mut S, today: DayNumber) -> Self {
        let mut selector = DailyWordSelector::new(bank);
        let session = restore_or_create(&mut selector, store, today);
        Self {
            selector,
            store,
            today,
            session,
        }
    }

    /// Machine for the current local date
    pub fn open_today(bank: &'a WordBank, store: &'a mut S) -> Self {
        Self::new(bank, store, DayNumber::today())
    }

    /// Restore the stored session for `day`, or start and store a fresh one
    ///
    /// Finished sessions come back finished. No bounds are checked here;
    /// hosts should go through [`navigate_to`](Self::navigate_to).
    pub fn load_or_create(&mut self, day: DayNumber) -> &PuzzleSession {
        self.session = restore_or_create(&mut self.selector, self.store, day);
        &self.session
    }

    /// Switch to the puzzle for `day`
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::FutureDay`] if `day` is after today; the
    /// current session is kept.
    pub fn navigate_to(&mut self, day: DayNumber) -> Result<&PuzzleSession, NavigationError> {
        if day > self.today {
            return Err(NavigationError::FutureDay {
                requested: day,
                today: self.today,
            });
        }
        Ok(self.load_or_create(day))
    }

    /// Move `delta` days from the current session
    ///
    /// # Errors
    ///
    /// Same as [`navigate_to`](Self::navigate_to).
    pub fn step(&mut self, delta: i64) -> Result<&PuzzleSession, NavigationError> {
        self.navigate_to(self.session.day_number().offset(delta))
    }

    /// Validate and apply a guess
    ///
    /// Input is trimmed and lowercased. Checks run in order and the first
    /// failure wins: finished puzzle, length, duplicate, dictionary.
    ///
    /// # Errors
    ///
    /// Returns the matching [`GuessError`]; nothing is changed or stored.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.session.game_over() {
            return Err(GuessError::GameOver(self.session.day_number()));
        }

        let normalized = raw.trim().to_lowercase();
        let length = normalized.chars().count();
        if length != WORD_LENGTH {
            return Err(GuessError::InvalidLength(length));
        }
        if self.session.has_guessed(&normalized) {
            return Err(GuessError::DuplicateGuess(normalized));
        }
        let Some(guess) = self.selector.bank().get(&normalized).cloned() else {
            return Err(GuessError::UnknownWord(normalized));
        };

        let feedback = self.session.push_guess(guess);
        debug!(
            "Day {}: guess {} of {} scored {feedback}",
            self.session.day_number(),
            self.session.guesses().len(),
            crate::core::MAX_ATTEMPTS
        );

        if let Err(err) = self.store.put_session(&self.session) {
            warn!("Failed to save session: {err}");
        }
        if self.session.game_over() {
            self.record_finish();
        }

        Ok(GuessOutcome {
            feedback,
            game_over: self.session.game_over(),
            has_won: self.session.has_won(),
            attempts_used: self.session.guesses().len(),
        })
    }

    fn record_finish(&mut self) {
        let day = self.session.day_number();
        let mut stats = match self.store.get_statistics() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!("Skipping statistics for day {day}; stored statistics unreadable: {err}");
                return;
            }
        };

        if stats.record(day, self.session.has_won(), self.session.guesses().len()) {
            info!(
                "Day {day} finished ({}); {} played, streak {}",
                if self.session.has_won() { "won" } else { "lost" },
                stats.games_played,
                stats.current_streak
            );
            if let Err(err) = self.store.put_statistics(&stats) {
                warn!("Failed to save statistics: {err}");
            }
        }
    }

    #[must_use]
    pub const fn session(&self) -> &PuzzleSession {
        &self.session
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub const fn today(&self) -> DayNumber {
        self.today
    }

    #[must_use]
    pub fn is_today(&self) -> bool {
        self.session.day_number() == self.today
    }

    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.selector.bank()
    }

    /// Backing store, for read-only queries such as history
    #[must_use]
    pub fn store(&self) -> &S {
        self.store
    }

    /// Best status per letter across the session's guesses
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(self.session.guesses(), self.session.target_word())
    }

    #[must_use]
    pub fn feedback_rows(&self) -> Vec<Feedback> {
        self.session.feedback_rows()
    }

    /// Stored statistics, or empty ones if none can be read
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        match self.store.get_statistics() {
            Ok(stats) => stats.unwrap_or_default(),
            Err(err) => {
                warn!("Failed to read statistics: {err}");
                Statistics::default()
            }
        }
    }

    /// Emoji summary of the current session
    #[must_use]
    pub fn share_text(&self, decoration: &str) -> String {
        build_share_text(
            self.session.day_number(),
            self.session.guesses(),
            self.session.target_word(),
            decoration,
        )
    }

    /// Message for a won session
    #[must_use]
    pub fn celebration(&self) -> Option<&'static str> {
        match self.phase() {
            Phase::Finished(Outcome::Won) => Some(win_celebration_text(self.session.day_number())),
            _ => None,
        }
    }
}

fn restore_or_create<S: Storage + ?Sized>(
    selector: &mut DailyWordSelector<'_>,
    store: &mut S,
    day: DayNumber,
) -> PuzzleSession {
    match store.get_session(day) {
        Ok(Some(session)) if session.day_number() == day => {
            debug!("Restored session for day {day}");
            return session;
        }
        Ok(Some(session)) => warn!(
            "Stored session for day {day} is labelled day {}; starting over",
            session.day_number()
        ),
        Ok(None) => {}
        Err(err) => warn!("Failed to load session for day {day}, starting fresh: {err}"),
    }

    let target: Word = selector.word_for_day(day).clone();
    let session = PuzzleSession::new(day, target);
    if let Err(err) = store.put_session(&session) {
        warn!("Failed to save new session for day {day}: {err}");
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, MAX_ATTEMPTS};
    use crate::storage::{MemoryStore, StorageError, session_key};
    use crate::tests::UsingLogger;
    use std::cell::Cell;
    use std::io;
    use test_context::test_context;

    const TODAY: DayNumber = DayNumber::new(9788);

    // Day 9788 draws index 7 ("eagle"), day 9787 index 5 ("fuzzy")
    fn bank() -> WordBank {
        WordBank::new([
            "allow", "allot", "lowly", "crane", "slate", "fuzzy", "ghost", "eagle", "hello",
            "robot",
        ])
        .unwrap()
    }

    /// Memory store whose reads or writes can be made to fail
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: Cell<bool>,
        fail_writes: Cell<bool>,
    }

    fn broken(key: &str) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source: io::Error::other("disk on fire"),
        }
    }

    impl Storage for FlakyStore {
        fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads.get() {
                return Err(broken(key));
            }
            self.inner.get_raw(key)
        }

        fn set_raw(&mut self, key: &str, value: String) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(broken(key));
            }
            self.inner.set_raw(key, value)
        }

        fn clear(&mut self) -> Result<(), StorageError> {
            self.inner.clear()
        }
    }

    #[test]
    fn new_machine_creates_and_stores_todays_session() {
        let bank = bank();
        let mut store = MemoryStore::new();
        {
            let machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
            assert_eq!(machine.session().target_word().text(), "eagle");
            assert_eq!(machine.phase(), Phase::Active);
            assert!(machine.is_today());
        }
        assert!(store.get_session(TODAY).unwrap().is_some());
    }

    #[test]
    fn correct_guess_wins() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        let first = machine.submit_guess("crane").unwrap();
        assert!(!first.game_over);
        assert_eq!(first.attempts_used, 1);

        let second = machine.submit_guess("eagle").unwrap();
        assert!(second.game_over && second.has_won);
        assert_eq!(second.feedback, Feedback::SOLVED);
        assert_eq!(machine.phase(), Phase::Finished(Outcome::Won));
        assert_eq!(machine.celebration(), Some("Great!"));
    }

    #[test]
    fn six_misses_lose() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        for (n, guess) in ["allow", "allot", "lowly", "crane", "slate"].iter().enumerate() {
            let outcome = machine.submit_guess(guess).unwrap();
            assert!(!outcome.game_over, "finished early after guess {}", n + 1);
        }
        let last = machine.submit_guess("fuzzy").unwrap();
        assert!(last.game_over && !last.has_won);
        assert_eq!(machine.phase(), Phase::Finished(Outcome::Lost));
        assert_eq!(machine.celebration(), None);
    }

    #[test]
    fn win_on_last_attempt_counts_as_win() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        for guess in ["allow", "allot", "lowly", "crane", "slate"] {
            machine.submit_guess(guess).unwrap();
        }
        let last = machine.submit_guess("eagle").unwrap();
        assert!(last.game_over && last.has_won);
        assert_eq!(last.attempts_used, MAX_ATTEMPTS);
        assert_eq!(machine.phase(), Phase::Finished(Outcome::Won));

        let stats = machine.statistics();
        assert_eq!(stats.guess_distribution, [0, 0, 0, 0, 0, 1]);
        assert_eq!(stats.games_won, 1);
        assert_eq!(machine.share_text("🎯").lines().count(), MAX_ATTEMPTS + 1);
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("eagle").unwrap();

        assert_eq!(machine.submit_guess("crane"), Err(GuessError::GameOver(TODAY)));
        // Even garbage reports the finished state first
        assert_eq!(machine.submit_guess("x"), Err(GuessError::GameOver(TODAY)));
        assert_eq!(machine.session().guesses().len(), 1);
    }

    #[test]
    fn rejections_leave_session_untouched() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("crane").unwrap();
        let before = machine.session().clone();

        assert_eq!(machine.submit_guess("abc"), Err(GuessError::InvalidLength(3)));
        assert_eq!(machine.submit_guess("cranes"), Err(GuessError::InvalidLength(6)));
        assert_eq!(
            machine.submit_guess("CRANE"),
            Err(GuessError::DuplicateGuess("crane".to_string()))
        );
        assert_eq!(
            machine.submit_guess("zzzzz"),
            Err(GuessError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(
            machine.submit_guess("12345"),
            Err(GuessError::UnknownWord("12345".to_string()))
        );

        assert_eq!(machine.session(), &before);
    }

    #[test]
    fn length_counts_characters_after_trimming() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        assert_eq!(machine.submit_guess("ñandú"), Err(GuessError::UnknownWord("ñandú".to_string())));
        let outcome = machine.submit_guess("  Slate\n").unwrap();
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(machine.session().guesses()[0].text(), "slate");
    }

    #[test]
    fn progress_survives_reopening() {
        let bank = bank();
        let mut store = MemoryStore::new();
        {
            let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
            machine.submit_guess("crane").unwrap();
            machine.submit_guess("slate").unwrap();
        }

        let machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        let guesses: Vec<&str> = machine.session().guesses().iter().map(Word::text).collect();
        assert_eq!(guesses, ["crane", "slate"]);
        assert_eq!(machine.feedback_rows().len(), 2);
    }

    #[test]
    fn finished_session_restores_finished() {
        let bank = bank();
        let mut store = MemoryStore::new();
        {
            let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
            machine.submit_guess("eagle").unwrap();
        }

        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        assert_eq!(machine.phase(), Phase::Finished(Outcome::Won));
        assert!(machine.submit_guess("crane").is_err());
    }

    #[test]
    fn future_days_are_refused() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        let err = machine.navigate_to(TODAY.offset(1)).unwrap_err();
        assert_eq!(
            err,
            NavigationError::FutureDay {
                requested: TODAY.offset(1),
                today: TODAY
            }
        );
        assert!(machine.step(1).is_err());
        assert_eq!(machine.session().day_number(), TODAY);
    }

    #[test]
    fn navigation_switches_sessions() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("crane").unwrap();

        let yesterday = machine.step(-1).unwrap();
        assert_eq!(yesterday.day_number(), TODAY.offset(-1));
        assert_eq!(yesterday.target_word().text(), "fuzzy");
        assert!(yesterday.guesses().is_empty());
        assert!(!machine.is_today());

        machine.step(1).unwrap();
        assert!(machine.is_today());
        assert_eq!(machine.session().guesses().len(), 1);
    }

    #[test_context(UsingLogger)]
    #[test]
    fn statistics_record_once_per_day(_: &mut UsingLogger) {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("crane").unwrap();
        machine.submit_guess("eagle").unwrap();

        machine.navigate_to(TODAY.offset(-1)).unwrap();
        machine.navigate_to(TODAY).unwrap();
        let _ = machine.submit_guess("eagle");

        let stats = machine.statistics();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn archived_day_joins_streak() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.navigate_to(TODAY.offset(-1)).unwrap();
        machine.submit_guess("fuzzy").unwrap();
        machine.navigate_to(TODAY).unwrap();
        machine.submit_guess("eagle").unwrap();

        let stats = machine.statistics();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test_context(UsingLogger)]
    #[test]
    fn corrupt_stored_session_is_replaced(_: &mut UsingLogger) {
        let bank = bank();
        let mut store = MemoryStore::new();
        store
            .set_raw(&session_key(TODAY), r#"{"dayNumber":9788,"targetWord":"xx"}"#.to_string())
            .unwrap();

        let machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        assert_eq!(machine.session().target_word().text(), "eagle");
        drop(machine);
        assert_eq!(
            store.get_session(TODAY).unwrap().unwrap().target_word().text(),
            "eagle"
        );
    }

    #[test]
    fn mislabelled_session_is_replaced() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let stray = PuzzleSession::new(TODAY.offset(-3), Word::new("robot").unwrap());
        store
            .set_raw(&session_key(TODAY), serde_json::to_string(&stray).unwrap())
            .unwrap();

        let machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        assert_eq!(machine.session().day_number(), TODAY);
        assert_eq!(machine.session().target_word().text(), "eagle");
    }

    #[test_context(UsingLogger)]
    #[test]
    fn failed_reads_start_fresh_and_skip_statistics(_: &mut UsingLogger) {
        let bank = bank();
        let mut store = FlakyStore::default();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("crane").unwrap();

        machine.store().fail_reads.set(true);
        machine.load_or_create(TODAY);
        assert!(machine.session().guesses().is_empty());

        machine.submit_guess("eagle").unwrap();
        assert_eq!(machine.statistics(), Statistics::default());

        machine.store().fail_reads.set(false);
        assert_eq!(machine.statistics(), Statistics::default());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn failed_writes_do_not_block_play(_: &mut UsingLogger) {
        let bank = bank();
        let mut store = FlakyStore::default();
        store.fail_writes.set(true);
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);

        let outcome = machine.submit_guess("eagle").unwrap();
        assert!(outcome.has_won);
        assert!(machine.store().inner.is_empty());
    }

    #[test]
    fn keyboard_and_share_follow_session() {
        let bank = bank();
        let mut store = MemoryStore::new();
        let mut machine = PuzzleStateMachine::new(&bank, &mut store, TODAY);
        machine.submit_guess("crane").unwrap();
        machine.submit_guess("eagle").unwrap();

        let keyboard = machine.keyboard();
        assert_eq!(keyboard.status('e'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.status('c'), Some(LetterStatus::Absent));
        assert_eq!(keyboard.status('z'), None);

        let share = machine.share_text("🎉");
        let lines: Vec<&str> = share.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("2/6"));
        assert_eq!(lines[2], "🟩🟩🟩🟩🟩");
    }
}
