use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::debug;
use unyield_domain::StorageError;

use crate::KeyValueStore;

const EXTENSION: &str = "json";

/// Store keeping one JSON file per key in a directory.
///
/// Values are written to a temporary file in the same directory and renamed into place, so a
/// crash during a write leaves either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in `dir`, creating the directory if necessary.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("opened file store in {}", dir.display());
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidData {
                key: key.to_string(),
                reason: String::from("invalid key"),
            });
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let parent = path.parent().ok_or_else(|| StorageError::InvalidData {
        key: path.display().to_string(),
        reason: String::from("no parent directory"),
    })?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn remove_file(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
        _ => Ok(()),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write_atomic(&self.path(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        remove_file(&self.path(key)?)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == EXTENSION) {
                remove_file(&path)?;
            }
        }
        Ok(())
    }
}
