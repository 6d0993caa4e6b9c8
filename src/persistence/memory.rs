//! In-memory record store

use super::{PersistenceError, RecordStore, SavedRecord};

/// Keeps the record in memory and remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    current: Option<SavedRecord>,
    /// Every record saved, oldest first
    pub saves: Vec<SavedRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a saved record
    pub fn with_record(record: SavedRecord) -> Self {
        Self {
            current: Some(record),
            saves: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<SavedRecord> {
        self.current
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SavedRecord>, PersistenceError> {
        Ok(self.current)
    }

    fn save(&mut self, record: &SavedRecord) -> Result<(), PersistenceError> {
        self.current = Some(*record);
        self.saves.push(*record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BestRecord;

    #[test]
    fn test_roundtrip_and_history() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let first = SavedRecord::from(BestRecord::new(30, 2));
        let second = SavedRecord::from(BestRecord::new(60, 3));
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), Some(second));
        assert_eq!(store.saves, vec![first, second]);
    }
}
