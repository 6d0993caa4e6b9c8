//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering, storage or
//! platform dependencies:
//! - One `tick` per frame, movement in per-tick units
//! - Seeded RNG only
//! - Stable iteration order (spawn order)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{centers_collide, check_collision, overlaps};
pub use state::{Board, Coin, Enemy, Entity, EntityKind, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, collect_coin, game_over, start_game, tick, update_difficulty};
