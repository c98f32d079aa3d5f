//! File-backed gateway: one JSON file per slot in a data directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::{PersistenceGateway, Slot, StorageError};

/// Stores each slot as `<data_dir>/<slot key>.json`.
#[derive(Clone, Debug)]
pub struct FileGateway {
    data_dir: PathBuf,
}

impl FileGateway {
    /// Creates a gateway rooted at `data_dir`. Nothing touches the disk until
    /// the first save.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the full path for a slot.
    pub fn path(&self, slot: Slot) -> PathBuf {
        self.data_dir.join(slot.filename())
    }

    /// Checks if a slot has been written.
    pub fn exists(&self, slot: Slot) -> bool {
        self.path(slot).exists()
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let path = self.path(slot);

        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(path, e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Writes to a sibling temp file and renames it over the slot, so a
    /// crash mid-write leaves the previous snapshot intact.
    fn save(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let path = self.path(slot);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::Io(tmp.clone(), e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::Io(path, e))?;

        Ok(())
    }
}
