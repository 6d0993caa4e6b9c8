//! Per-frame simulation tick
//!
//! Drives the phase machine (menu -> running -> game over -> running ...),
//! advances entities, resolves collisions and escalates difficulty.

use super::collision::check_collision;
use super::state::{Entity, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Logical input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Start (or restart) a run.
///
/// Resets score, level and the player, and replaces the coins and enemies
/// with exactly one of each.
pub fn start_game(state: &mut GameState) {
    state.phase = GamePhase::Running;
    state.score = 0;
    state.level = 1;
    state.run_time = 0.0;
    state.player.reset();

    let coin = state.spawn_coin();
    state.coins = vec![coin];
    let enemy = state.spawn_enemy();
    state.enemies = vec![enemy];

    state.events.push(GameEvent::RunStarted);
    log::info!("Run started (record {})", state.best.record);
}

/// End the current run.
///
/// Only acts while running, so repeated calls within one tick are no-ops:
/// a second fatal hit in the same tick is absorbed and saves nothing.
/// Returns true if the phase actually changed.
pub fn game_over(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }

    state.phase = GamePhase::GameOver;
    state.best.observe_score(state.score);
    state.best.observe_level(state.level);

    state.events.push(GameEvent::GameOver {
        score: state.score,
        level: state.level,
        best: state.best,
    });
    log::info!(
        "Game over: score {} level {} (record {}, best level {})",
        state.score,
        state.level,
        state.best.record,
        state.best.best_level
    );
    true
}

/// Escalate difficulty after a score change.
///
/// Every positive multiple of `LEVEL_UP_SCORE` adds a level and an enemy.
/// The record is kept in step with the score either way.
pub fn update_difficulty(state: &mut GameState) {
    if state.score % LEVEL_UP_SCORE == 0 && state.score != 0 {
        state.level += 1;
        let enemy = state.spawn_enemy();
        state.enemies.push(enemy);

        state.events.push(GameEvent::LevelUp {
            level: state.level,
            enemies: state.enemies.len(),
        });
        log::info!(
            "Level {} reached, {} enemies",
            state.level,
            state.enemies.len()
        );
    }
    state.best.observe_score(state.score);
}

/// Score coin `index`: add points, move the coin, check difficulty
pub fn collect_coin(state: &mut GameState, index: usize) {
    state.score += COIN_SCORE;
    state.relocate_coin(index);
    state.events.push(GameEvent::CoinCollected { score: state.score });
    log::debug!("Coin collected, score {}", state.score);
    update_difficulty(state);
}

/// Advance the game by one frame. Does nothing outside `Running`.
///
/// Movement is per tick; `dt` (seconds) only feeds the run timer.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.run_time += dt;

    let board = state.board;
    state
        .player
        .update(input.up, input.down, input.left, input.right, &board);

    let mut i = 0;
    while i < state.coins.len() {
        let coin = &state.coins[i];
        if check_collision(&state.player, coin, state.player.width, coin.size) {
            collect_coin(state, i);
        }
        i += 1;
    }

    // Every enemy moves and checks this tick, even once the last life is
    // gone; game_over ignores the repeats.
    for i in 0..state.enemies.len() {
        let target = state.player.center();
        state.enemies[i].update(target);

        let enemy = &state.enemies[i];
        if check_collision(&state.player, enemy, state.player.width, enemy.size) {
            let out_of_lives = state.player.lose_life();
            state.events.push(GameEvent::PlayerHit {
                life: state.player.life,
            });
            log::debug!("Player hit, {} lives left", state.player.life);
            if out_of_lives {
                game_over(state);
            }
        }
    }
}
