//! Best score tracking
//!
//! Holds the all-time best score and level reached. Both values only ever
//! grow; the persistence layer stores them after each game over.

use serde::{Deserialize, Serialize};

/// Value used for both fields when nothing (or nothing usable) was saved
pub const DEFAULT_RECORD: u32 = 1;

/// Best score and best level across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    /// Highest score reached
    pub record: u32,
    /// Highest level reached
    pub best_level: u32,
}

impl Default for BestRecord {
    fn default() -> Self {
        Self {
            record: DEFAULT_RECORD,
            best_level: DEFAULT_RECORD,
        }
    }
}

impl BestRecord {
    pub fn new(record: u32, best_level: u32) -> Self {
        Self {
            record,
            best_level,
        }
        .normalized()
    }

    /// Replace zero (missing) values with the defaults
    pub fn normalized(self) -> Self {
        Self {
            record: if self.record == 0 { DEFAULT_RECORD } else { self.record },
            best_level: if self.best_level == 0 {
                DEFAULT_RECORD
            } else {
                self.best_level
            },
        }
    }

    /// Raise the record if `score` beats it. Returns true if it did.
    pub fn observe_score(&mut self, score: u32) -> bool {
        if score > self.record {
            self.record = score;
            true
        } else {
            false
        }
    }

    /// Raise the best level if `level` beats it. Returns true if it did.
    pub fn observe_level(&mut self, level: u32) -> bool {
        if level > self.best_level {
            self.best_level = level;
            true
        } else {
            false
        }
    }
}
