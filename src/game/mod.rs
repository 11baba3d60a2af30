//! Per-day puzzle state and the rules that drive it

mod machine;
mod session;

pub use machine::{GuessError, GuessOutcome, NavigationError, PuzzleStateMachine};
pub use session::{Outcome, Phase, PuzzleSession};
