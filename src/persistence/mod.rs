//! Save/load of the best record
//!
//! Features:
//! - `RecordStore` port the engine saves through on every game over
//! - JSON file store for native hosts (atomic tmp -> save rename)
//! - In-memory store for tests and throwaway sessions
//! - Missing or zero fields fall back to the defaults

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::BestRecord;

/// Persisted record layout: `{"record": N, "bestLevel": M}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    #[serde(default)]
    pub record: Option<u32>,
    #[serde(default)]
    pub best_level: Option<u32>,
}

impl SavedRecord {
    /// Convert to a `BestRecord`, defaulting missing or zero fields
    pub fn into_best(self) -> BestRecord {
        BestRecord::new(self.record.unwrap_or(0), self.best_level.unwrap_or(0))
    }
}

impl From<BestRecord> for SavedRecord {
    fn from(best: BestRecord) -> Self {
        Self {
            record: Some(best.record),
            best_level: Some(best.best_level),
        }
    }
}

/// Errors raised by record stores
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("record storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Storage for the best record
pub trait RecordStore {
    /// Load the saved record, `None` when nothing was saved yet
    fn load(&mut self) -> Result<Option<SavedRecord>, PersistenceError>;

    /// Save the record, replacing any previous one
    fn save(&mut self, record: &SavedRecord) -> Result<(), PersistenceError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&mut self) -> Result<Option<SavedRecord>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, record: &SavedRecord) -> Result<(), PersistenceError> {
        (**self).save(record)
    }
}

/// Load the best record, falling back to defaults on any failure
pub fn load_best(store: &mut dyn RecordStore) -> BestRecord {
    match store.load() {
        Ok(Some(saved)) => {
            let best = saved.into_best();
            log::info!(
                "Loaded record {} (best level {})",
                best.record,
                best.best_level
            );
            best
        }
        Ok(None) => {
            log::info!("No saved record found, starting fresh");
            BestRecord::default()
        }
        Err(e) => {
            log::warn!("Could not load saved record, using defaults: {}", e);
            BestRecord::default()
        }
    }
}

/// Save the best record; failures are logged and otherwise ignored
pub fn save_best(store: &mut dyn RecordStore, best: BestRecord) {
    match store.save(&SavedRecord::from(best)) {
        Ok(()) => log::info!(
            "Record saved ({} / level {})",
            best.record,
            best.best_level
        ),
        Err(e) => log::warn!("Could not save record: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn load(&mut self) -> Result<Option<SavedRecord>, PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("disk on fire")))
        }

        fn save(&mut self, _record: &SavedRecord) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn test_json_layout() {
        let saved = SavedRecord::from(BestRecord::new(120, 4));
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"record":120,"bestLevel":4}"#);
    }

    #[test]
    fn test_missing_and_falsy_fields_default() {
        let cases = [
            (r#"{}"#, BestRecord::new(1, 1)),
            (r#"{"record":50}"#, BestRecord::new(50, 1)),
            (r#"{"bestLevel":3}"#, BestRecord::new(1, 3)),
            (r#"{"record":0,"bestLevel":null}"#, BestRecord::new(1, 1)),
            (r#"{"record":90,"bestLevel":4,"extra":true}"#, BestRecord::new(90, 4)),
        ];
        for (json, expected) in cases {
            let saved: SavedRecord = serde_json::from_str(json).unwrap();
            assert_eq!(saved.into_best(), expected, "{}", json);
        }
    }

    #[test]
    fn test_load_best_defaults_on_error() {
        let mut store = BrokenStore;
        assert_eq!(load_best(&mut store), BestRecord::default());
        // Must not panic
        save_best(&mut store, BestRecord::new(10, 2));
    }

    #[test]
    fn test_load_best_absent() {
        let mut store = MemoryStore::new();
        assert_eq!(load_best(&mut store), BestRecord::default());
    }
}
