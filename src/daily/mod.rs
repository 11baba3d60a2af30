//! Daily puzzle selection
//!
//! Maps each day number to a word with a seeded generator. The generator and
//! the draw-to-index mapping are a compatibility contract: they decide the
//! word of every past and future day.

mod rng;
mod selector;

pub use rng::{SeedRandom, unit_interval};
pub use selector::{DailyWordSelector, index_for_day, win_celebration_text};
