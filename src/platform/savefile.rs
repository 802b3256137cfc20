//! On-disk persistence of the game snapshot
//!
//! One small JSON file holds the instance state between sessions.
//! Writes go through a sibling temp file and a rename so an interrupted
//! write never leaves a half-written snapshot behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::app::snapshot::GameSnapshot;

#[derive(Debug, Error)]
pub enum SaveFileError {
    #[error("Failed to read save file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Save file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write save file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes the snapshot at a fixed path
#[derive(Debug, Clone)]
pub struct SaveFileStore {
    path: PathBuf,
}

impl SaveFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot if one exists
    ///
    /// A missing file is the normal first-launch case and yields `None`.
    /// An unreadable or corrupt file is an error; the caller decides to
    /// fall back to a fresh game.
    pub fn load(&self) -> Result<Option<GameSnapshot>, SaveFileError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SaveFileError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot = serde_json::from_str(&raw).map_err(|source| SaveFileError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(snapshot))
    }

    /// Writes the snapshot atomically (temp file + rename)
    pub fn store(&self, snapshot: &GameSnapshot) -> Result<(), SaveFileError> {
        let raw = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, raw).map_err(|source| SaveFileError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| SaveFileError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Deletes the save file; missing files are fine
    pub fn remove(&self) -> Result<(), SaveFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SaveFileError::WriteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
