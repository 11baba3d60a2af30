//! Command implementations

pub mod evaluate;
pub mod reveal;
pub mod share;
pub mod simple;

pub use evaluate::{EvaluationResult, evaluate_pair};
pub use reveal::{RevealResult, reveal_word};
pub use share::share_for_day;
pub use simple::run_simple;
