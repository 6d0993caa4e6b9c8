//! Dodge & Collect - A coin-collecting arcade game with pursuing enemies
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, game state machine)
//! - `record`: Best score / best level bookkeeping
//! - `persistence`: Load/save of the best record
//! - `platform`: Input mapping and clock sources
//! - `renderer`: Read-only frame snapshots and draw lists for rendering hosts
//! - `engine`: Host-facing engine composing the collaborators
//! - `settings`: Host configuration

pub mod engine;
pub mod persistence;
pub mod platform;
pub mod record;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::Engine;
pub use record::BestRecord;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player movement per tick along each pressed axis
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Lives at the start of a run
    pub const PLAYER_LIVES: u8 = 3;
    /// Where the player starts and respawns after an enemy hit
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(200.0, 200.0);

    /// Coin diameter
    pub const COIN_SIZE: f32 = 20.0;
    /// Points awarded per coin
    pub const COIN_SCORE: u32 = 10;

    /// Enemy square side length
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Enemy pursuit speed per tick (independent of player speed)
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Every time the score reaches a multiple of this, the level goes up
    /// and one more enemy joins
    pub const LEVEL_UP_SCORE: u32 = 30;

    /// Fallback board dimensions when the host doesn't provide any
    pub const DEFAULT_BOARD_WIDTH: f32 = 800.0;
    pub const DEFAULT_BOARD_HEIGHT: f32 = 600.0;

    /// Upper bound on a single frame's elapsed time (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame time used for the first frame
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
}

/// Restrict `value` to `[min, max]`.
///
/// `min <= max` is assumed. When it doesn't hold, `min` wins, so an entity
/// larger than the board is pinned to the top-left corner.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        // Inverted range resolves to min
        assert_eq!(clamp(5.0, 0.0, -10.0), 0.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), 0.0);
        assert_eq!(
            distance(Vec2::new(-2.0, 7.0), Vec2::new(4.0, -1.0)),
            distance(Vec2::new(4.0, -1.0), Vec2::new(-2.0, 7.0))
        );
    }
}
