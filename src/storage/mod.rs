//! Persistence boundary
//!
//! Puzzle sessions and statistics are JSON values stored under string keys.
//! Backends only provide raw get/set/clear per key; the typed accessors are
//! shared.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::clock::DayNumber;
use crate::game::PuzzleSession;
use crate::stats::Statistics;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Prefix shared by every key this crate writes
pub const KEY_PREFIX: &str = "lexi_";

/// Key of the global statistics record
pub const STATISTICS_KEY: &str = "lexi_statistics";

/// Key of a day's puzzle session
#[must_use]
pub fn session_key(day: DayNumber) -> String {
    format!("{KEY_PREFIX}game_state_{day}")
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed value under '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for puzzle state
///
/// Each get and set is atomic per key; nothing spans keys.
pub trait Storage {
    /// Raw JSON under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_raw(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove every key written by this crate
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be cleared.
    fn clear(&mut self) -> Result<(), StorageError>;

    /// Stored session for `day`
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure or malformed JSON.
    fn get_session(&self, day: DayNumber) -> Result<Option<PuzzleSession>, StorageError> {
        get_json(self, &session_key(day))
    }

    /// Store a session under its own day number (full overwrite)
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure.
    fn put_session(&mut self, session: &PuzzleSession) -> Result<(), StorageError> {
        put_json(self, &session_key(session.day_number()), session)
    }

    /// Stored statistics
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure or malformed JSON.
    fn get_statistics(&self) -> Result<Option<Statistics>, StorageError> {
        get_json(self, STATISTICS_KEY)
    }

    /// Store statistics (full overwrite)
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure.
    fn put_statistics(&mut self, stats: &Statistics) -> Result<(), StorageError> {
        put_json(self, STATISTICS_KEY, stats)
    }
}

fn get_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    store
        .get_raw(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
}

fn put_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: Storage + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.set_raw(key, raw)
}
