//! JSON-file storage backend

use super::{KEY_PREFIX, Storage, StorageError};
use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage in a directory, one `<key>.json` file per key
///
/// The directory is created on first write. Writes go to a temporary file
/// that is renamed over the target, so a reader never sees half a value.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

fn io_error(key: &str, source: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                trace!("Read {}", path.display());
                Ok(Some(contents))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, err)),
        }
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|err| io_error(key, err))?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|err| io_error(key, err))?;
        fs::rename(&staging, &path).map_err(|err| io_error(key, err))?;

        trace!("Wrote {}", path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(io_error("*", err)),
        };

        for entry in entries {
            let path = entry.map_err(|err| io_error("*", err))?.path();
            let owned = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(KEY_PREFIX) && name.contains(".json"));
            if owned {
                fs::remove_file(&path).map_err(|err| io_error("*", err))?;
                debug!("Removed {}", path.display());
            }
        }
        Ok(())
    }
}
