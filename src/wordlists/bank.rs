//! Ordered, immutable word bank

use super::embedded::WORDS;
use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors from building or indexing a word bank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    #[error("invalid word '{word}' at position {index}: {source}")]
    InvalidWord {
        index: usize,
        word: String,
        source: WordError,
    },
    #[error("duplicate word '{0}'")]
    DuplicateWord(String),
    #[error("word bank is empty")]
    Empty,
    #[error("index {index} out of range for word bank of {len} words")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The list of puzzle words
///
/// Positions are stable for the lifetime of the bank; daily selection
/// depends on them. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    positions: FxHashMap<String, usize>,
}

impl WordBank {
    /// Build a bank from words in selection order
    ///
    /// # Errors
    ///
    /// Fails if any entry is not a valid 5-letter word, if a word repeats,
    /// or if the list is empty.
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut positions = FxHashMap::default();

        for (index, raw) in words.into_iter().enumerate() {
            let raw = raw.as_ref();
            let word = Word::new(raw).map_err(|source| WordBankError::InvalidWord {
                index,
                word: raw.to_string(),
                source,
            })?;

            if positions.insert(word.text().to_string(), index).is_some() {
                return Err(WordBankError::DuplicateWord(word.text().to_string()));
            }
            list.push(word);
        }

        if list.is_empty() {
            return Err(WordBankError::Empty);
        }

        Ok(Self {
            words: list,
            positions,
        })
    }

    /// The bank compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list itself is malformed.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(WORDS)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Canonical entry for `word`, if present (case-insensitive)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.positions
            .get(word.to_lowercase().as_str())
            .map(|&index| &self.words[index])
    }

    /// Word at a position
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn word_at(&self, index: usize) -> Result<&Word, WordBankError> {
        self.words
            .get(index)
            .ok_or(WordBankError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    /// Word selected by a uniform draw in [0, 1)
    ///
    /// Index is `floor(unit × len)`, clamped into range.
    #[must_use]
    pub fn pick(&self, unit: f64) -> &Word {
        &self.words[index_for_unit(unit, self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

/// Map a uniform draw in [0, 1) onto `0..len`
///
/// `len` must be non-zero.
#[must_use]
pub fn index_for_unit(unit: f64, len: usize) -> usize {
    ((unit * len as f64).floor() as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_maps_to_floor_index() {
        assert_eq!(index_for_unit(0.0, 10), 0);
        assert_eq!(index_for_unit(0.728_349_414_016_899_5, 10), 7);
        assert_eq!(index_for_unit(0.999_999_999_999_999_9, 10), 9);
        assert_eq!(index_for_unit(0.5, 1), 0);
    }

    #[test]
    fn pick_uses_position() {
        let bank = small_bank();
        assert_eq!(bank.pick(0.0).text(), "crane");
        assert_eq!(bank.pick(0.5).text(), "slate");
        assert_eq!(bank.pick(0.99).text(), "allow");
    }

    fn small_bank() -> WordBank {
        WordBank::new(["crane", "slate", "allow"]).unwrap()
    }

    #[test]
    fn positions_follow_input_order() {
        let bank = small_bank();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.word_at(0).unwrap().text(), "crane");
        assert_eq!(bank.word_at(2).unwrap().text(), "allow");
    }

    #[test]
    fn word_at_out_of_range() {
        let bank = small_bank();
        assert_eq!(
            bank.word_at(3),
            Err(WordBankError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn contains_is_case_insensitive() {
        let bank = small_bank();
        assert!(bank.contains("slate"));
        assert!(bank.contains("SLATE"));
        assert!(bank.contains("SlAtE"));
        assert!(!bank.contains("zzzzz"));
        assert!(!bank.contains("slat"));
    }

    #[test]
    fn get_returns_canonical_word() {
        let bank = small_bank();
        assert_eq!(bank.get("ALLOW").map(Word::text), Some("allow"));
        assert!(bank.get("lowly").is_none());
    }

    #[test]
    fn input_is_normalized() {
        let bank = WordBank::new(["CRANE"]).unwrap();
        assert!(bank.contains("crane"));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            WordBank::new(["crane", "slate", "Crane"]).unwrap_err(),
            WordBankError::DuplicateWord("crane".to_string())
        );
    }

    #[test]
    fn rejects_invalid_words() {
        let err = WordBank::new(["crane", "toolong"]).unwrap_err();
        assert!(matches!(
            err,
            WordBankError::InvalidWord {
                index: 1,
                source: WordError::InvalidLength(7),
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(WordBank::new(empty).unwrap_err(), WordBankError::Empty);
    }
}
