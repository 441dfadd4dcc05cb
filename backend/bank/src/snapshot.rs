use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{BankError, records::LeaderboardRecord};

pub const DEFAULT_SNAPSHOT_PATH: &str = "data.json";

/// The ranked leaderboard as persisted on disk.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// snapshot, so readers see either the previous or the new content in full.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, records: &[LeaderboardRecord]) -> Result<(), BankError> {
        let json = serde_json::to_vec_pretty(records)?;
        let dir = self.dir();

        fs::create_dir_all(dir).map_err(|e| BankError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| BankError::io(dir, e))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| BankError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| BankError::io(&self.path, e.error))?;

        Ok(())
    }

    /// Snapshot bytes exactly as persisted.
    pub fn read_raw(&self) -> Result<Vec<u8>, BankError> {
        fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BankError::SnapshotMissing(self.path.clone()),
            _ => BankError::io(&self.path, e),
        })
    }

    pub fn read(&self) -> Result<Vec<LeaderboardRecord>, BankError> {
        Ok(serde_json::from_slice(&self.read_raw()?)?)
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
