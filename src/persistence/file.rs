//! JSON file record store
//!
//! Writes go to `<path>.tmp` first and are renamed over the save file, so a
//! crash mid-write leaves the previous record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistenceError, RecordStore, SavedRecord};

/// Record store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<SavedRecord>, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if json.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&mut self, record: &SavedRecord) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string(record)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
