//! Host settings
//!
//! Read from a JSON file next to the save data. Every field has a default,
//! so partial files are fine and a missing file means "all defaults".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use crate::sim::Board;

/// Default settings file name
pub const SETTINGS_FILE: &str = "dodge_collect_settings.json";

/// Default record file name (the saved `{record, bestLevel}` pair)
pub const RECORD_FILE: &str = "dodge_collect_data.json";

/// Problems reading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Playable width
    pub board_width: f32,
    /// Playable height
    pub board_height: f32,

    // === Simulation ===
    /// RNG seed; random when absent
    pub seed: Option<u64>,

    // === Persistence ===
    /// Where the best record is saved
    pub record_path: PathBuf,

    // === Loop ===
    /// Frames per second the host aims for
    pub target_fps: u32,
    /// Stop after this many frames (0 = run until interrupted)
    pub max_frames: u64,
    /// Let the autopilot play instead of reading the keyboard
    pub autopilot: bool,
    /// Frame summary interval for the log renderer
    pub log_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,

            seed: None,

            record_path: PathBuf::from(RECORD_FILE),

            target_fps: 60,
            max_frames: 3600,
            autopilot: true,
            log_every: 60,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the game can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.board_width.is_finite() && self.board_width > 0.0) {
            return Err(SettingsError::Invalid("board_width must be positive"));
        }
        if !(self.board_height.is_finite() && self.board_height > 0.0) {
            return Err(SettingsError::Invalid("board_height must be positive"));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be non-zero"));
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    /// Seconds per frame at the target rate
    pub fn frame_time(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}
