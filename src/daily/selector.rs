//! Day number to puzzle word mapping

use super::rng::{SeedRandom, unit_interval};
use crate::clock::DayNumber;
use crate::core::Word;
use crate::wordlists::{WordBank, index_for_unit};
use log::debug;
use rustc_hash::FxHashMap;

/// Messages shown when a puzzle is solved
const CELEBRATIONS: &[&str] = &[
    "Genius!",
    "Magnificent!",
    "Impressive!",
    "Splendid!",
    "Brilliant!",
    "Great!",
    "Nicely done!",
    "Phew!",
];

/// First uniform draw of a generator seeded with the day number's decimal form
fn day_draw(day: DayNumber) -> f64 {
    let mut rng = SeedRandom::new(&day.to_string());
    unit_interval(&mut rng)
}

/// Bank index of the puzzle word for `day`
///
/// `bank_len` must be non-zero.
///
/// # Examples
/// ```
/// use lexi::clock::DayNumber;
/// use lexi::daily::index_for_day;
///
/// // seedrandom("9788") first draws 0.72834…
/// assert_eq!(index_for_day(DayNumber::new(9788), 10), 7);
/// ```
#[must_use]
pub fn index_for_day(day: DayNumber, bank_len: usize) -> usize {
    index_for_unit(day_draw(day), bank_len)
}

/// Celebration message for solving the puzzle of `day`
///
/// Drawn from its own generator, so it never disturbs the word draw.
#[must_use]
pub fn win_celebration_text(day: DayNumber) -> &'static str {
    CELEBRATIONS[index_for_unit(day_draw(day), CELEBRATIONS.len())]
}

/// Deterministic daily word selection over a word bank
///
/// Results are memoized per day number; the memo never changes an answer.
pub struct DailyWordSelector<'a> {
    bank: &'a WordBank,
    memo: FxHashMap<DayNumber, &'a Word>,
}

impl<'a> DailyWordSelector<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self {
            bank,
            memo: FxHashMap::default(),
        }
    }

    /// Puzzle word for `day`
    pub fn word_for_day(&mut self, day: DayNumber) -> &'a Word {
        let bank = self.bank;
        *self.memo.entry(day).or_insert_with(|| {
            let unit = day_draw(day);
            debug!(
                "Day {day} draws {unit} -> word #{}",
                index_for_unit(unit, bank.len())
            );
            bank.pick(unit)
        })
    }

    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Number of memoized days
    #[must_use]
    pub fn memoized(&self) -> usize {
        self.memo.len()
    }
}
