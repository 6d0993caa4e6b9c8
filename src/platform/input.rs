//! Keyboard input mapping
//!
//! Raw key names (as reported by the host, any case) are tracked as a
//! pressed set and mapped to logical directions. Each direction has a
//! letter alias and an arrow alias.

use crate::sim::{Entity, GameState, TickInput};

/// Raw key name that confirms (start/restart)
pub const CONFIRM_KEY: &str = "enter";

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a raw key name to a direction (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "arrowup" => Some(Direction::Up),
            "s" | "arrowdown" => Some(Direction::Down),
            "a" | "arrowleft" => Some(Direction::Left),
            "d" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Input for one frame: held directions plus the one-shot confirm action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub tick: TickInput,
    pub confirm: bool,
}

/// Source of per-frame input for the engine
pub trait InputSource {
    /// Input for the coming frame. `state` is read-only context.
    fn poll(&mut self, state: &GameState) -> FrameInput;
}

/// Tracks held keys from key down/up events
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    keys: Vec<String>,
    confirm: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed. Repeats of a held key are ignored.
    pub fn key_down(&mut self, key: &str) {
        let key = key.to_lowercase();
        if key == CONFIRM_KEY {
            self.confirm = true;
        }
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    /// Key released
    pub fn key_up(&mut self, key: &str) {
        let key = key.to_lowercase();
        self.keys.retain(|k| *k != key);
    }

    /// Currently held raw keys (lowercase, press order)
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.keys
            .iter()
            .any(|k| Direction::from_key(k) == Some(direction))
    }

    /// Held directions as tick input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held(Direction::Up),
            down: self.is_held(Direction::Down),
            left: self.is_held(Direction::Left),
            right: self.is_held(Direction::Right),
        }
    }

    /// Consume a pending confirm press
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.confirm)
    }
}

impl InputSource for InputTracker {
    fn poll(&mut self, _state: &GameState) -> FrameInput {
        FrameInput {
            tick: self.tick_input(),
            confirm: self.take_confirm(),
        }
    }
}

/// Idle/demo mode: walk straight at the first coin and confirm whenever a
/// run isn't in progress.
pub fn autopilot(state: &GameState) -> FrameInput {
    if !state.is_running() {
        return FrameInput {
            tick: TickInput::default(),
            confirm: true,
        };
    }

    let Some(coin) = state.coins.first() else {
        return FrameInput::default();
    };

    let player = &state.player;
    let delta = coin.center() - player.center();
    // Dead zone of one step avoids jittering around the target
    let dead_zone = player.speed;

    FrameInput {
        tick: TickInput {
            up: delta.y < -dead_zone,
            down: delta.y > dead_zone,
            left: delta.x < -dead_zone,
            right: delta.x > dead_zone,
        },
        confirm: false,
    }
}

/// `InputSource` wrapper around [`autopilot`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> FrameInput {
        autopilot(state)
    }
}
