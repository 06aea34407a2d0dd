//! Snapshot file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::snapshot;
use crate::core::{SaveError, WorldState};

/// Default snapshot file name, in the working directory.
pub const DEFAULT_SAVE_PATH: &str = "GameSave.save";

/// Reads and writes the snapshot at a fixed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Overwrite the snapshot with `world`.
    ///
    /// The text is written to a temporary sibling and renamed over the
    /// target, so readers only ever see a complete snapshot.
    pub fn save(&self, world: &WorldState) -> Result<(), SaveError> {
        let staging = self.staging_path();
        fs::write(&staging, snapshot::encode(world))?;
        fs::rename(&staging, &self.path)?;
        log::debug!("snapshot written to {}", self.path.display());
        Ok(())
    }

    /// Read the snapshot back.
    ///
    /// Returns [`SaveError::NotFound`] when there is no game to resume.
    pub fn load(&self) -> Result<WorldState, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(SaveError::NotFound),
            Err(err) => return Err(err.into()),
        };
        snapshot::decode(&text)
    }

    /// Remove the snapshot. Missing files are fine.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("snapshot {} deleted", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
