//! Spoiler-free result summaries

use crate::clock::DayNumber;
use crate::core::{Feedback, MAX_ATTEMPTS, Word};

/// Header symbol used when the caller has no preference
pub const DEFAULT_DECORATION: &str = "🎯";

/// Text block summarizing a day's guesses without revealing letters
///
/// The header is `"<decoration> <date> <guesses>/6"`, followed by one row of
/// five glyphs per guess (🟩 correct, 🟨 present, ⬛ absent), joined by
/// newlines with no trailing newline.
#[must_use]
pub fn build_share_text(day: DayNumber, guesses: &[Word], target: &Word, decoration: &str) -> String {
    let header = format!(
        "{decoration} {} {}/{MAX_ATTEMPTS}",
        day.format(),
        guesses.len()
    );

    std::iter::once(header)
        .chain(
            guesses
                .iter()
                .map(|guess| Feedback::evaluate(guess, target).to_emoji()),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|text| Word::new(*text).unwrap()).collect()
    }

    #[test]
    fn two_guess_win() {
        let target = Word::new("allow").unwrap();
        let text = build_share_text(DayNumber::new(9788), &words(&["allot", "allow"]), &target, "🎉");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2/6"));
        assert_eq!(lines[0], "🎉 October 18, 2026 2/6");
        assert_eq!(lines[1], "🟩🟩🟩🟩⬛");
        assert!(lines[2].ends_with('🟩'));
        assert_eq!(lines[2], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn duplicate_letters_render_present() {
        let target = Word::new("allow").unwrap();
        let text = build_share_text(DayNumber::new(1), &words(&["lowly"]), &target, "🧩");
        assert_eq!(text, "🧩 January 1, 2000 1/6\n🟨🟨🟨🟨⬛");
    }

    #[test]
    fn no_guesses_is_header_only() {
        let target = Word::new("crane").unwrap();
        let text = build_share_text(DayNumber::new(9788), &[], &target, "📅");
        assert_eq!(text, "📅 October 18, 2026 0/6");
        assert!(!text.ends_with('\n'));
    }
}
