//! Single evaluation command
//!
//! Scores one guess against one target, outside of any puzzle session.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<EvaluationResult> {
    let guess = Word::new(guess.trim()).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target.trim()).with_context(|| format!("Invalid target '{target}'"))?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(EvaluationResult {
        guess,
        target,
        feedback,
    })
}
