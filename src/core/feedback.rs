//! Guess evaluation against a target word
//!
//! Classifies every letter of a guess as correct, present or absent,
//! following the duplicate-letter rules of the daily puzzle:
//! - Exact position matches are `Correct` first
//! - Each remaining occurrence of a letter in the target can justify one
//!   `Present`, consumed left to right
//! - Everything else is `Absent`

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered by strength, so the best status seen for a letter is its `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter does not occur (or all occurrences are already accounted for)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterStatus {
    /// Share-grid glyph for this status
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use lexi::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("geese").unwrap();
    /// let target = Word::new("eagle").unwrap();
    ///
    /// // The final E is correct, which leaves one E for the earliest
    /// // misplaced E; the second misplaced E gets nothing.
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &target).statuses(),
    ///     &[Present, Present, Absent, Absent, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();

        let mut result = [LetterStatus::Absent; WORD_LENGTH];

        // Remaining budget per letter, indexed by `letter - b'a'`
        let mut budget = [0u8; 26];
        for &ch in target {
            budget[usize::from(ch - b'a')] += 1;
        }

        // First pass: exact position matches consume their own occurrence
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                result[i] = LetterStatus::Correct;
                budget[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        // Second pass: left to right, misplaced letters draw on what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let remaining = &mut budget[usize::from(guess[i] - b'a')];
            if *remaining > 0 {
                result[i] = LetterStatus::Present;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Whether every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as a row of share glyphs (🟩 🟨 ⬛)
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.glyph()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Free-function form of [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::evaluate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> [LetterStatus; WORD_LENGTH] {
        *evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).statuses()
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["crane", "allow", "geese", "fuzzy"] {
            let w = Word::new(word).unwrap();
            assert!(evaluate(&w, &w).is_solved());
        }
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        assert_eq!(eval("fuzzy", "crane"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn repeated_letters_within_budget() {
        // ALLOW holds two Ls, so both misplaced Ls in LOWLY are present
        assert_eq!(eval("lowly", "allow"), [Present, Present, Present, Present, Absent]);
    }

    #[test]
    fn correct_letter_consumes_budget() {
        // The correct L at position 2 uses one of ALLOW's two Ls; the first
        // misplaced L takes the other, the second gets nothing
        assert_eq!(eval("lolly", "allow"), [Present, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn earlier_position_wins_present() {
        assert_eq!(eval("geese", "eagle"), [Present, Present, Absent, Absent, Correct]);
    }

    #[test]
    fn correct_later_in_word_beats_earlier_misplaced() {
        // THERE has two Es; the final one is correct, leaving one for the first E
        assert_eq!(eval("eerie", "there"), [Present, Absent, Present, Absent, Correct]);
        // ROBOT vs FLOOR: second O is correct, first O takes the other O
        assert_eq!(eval("robot", "floor"), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn mixed_feedback() {
        assert_eq!(eval("allot", "allow"), [Correct, Correct, Correct, Correct, Absent]);
        assert_eq!(eval("hello", "allow"), [Absent, Absent, Correct, Present, Present]);
        assert_eq!(eval("speed", "abide"), [Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn status_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Feedback::SOLVED.to_emoji(), "🟩🟩🟩🟩🟩");
        let feedback = evaluate(&Word::new("hello").unwrap(), &Word::new("allow").unwrap());
        assert_eq!(feedback.to_emoji(), "⬛⬛🟩🟨🟨");
        assert_eq!(feedback.to_string(), feedback.to_emoji());
    }
}
