//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here: the phase, the board, the
//! three entity kinds and the score bookkeeping.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::record::BestRecord;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay
    Running,
    /// Run ended, waiting for confirm to restart
    GameOver,
}

/// Playable area, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly random top-left position for a square of `size` that fits
    /// the board: `[0, width - size) x [0, height - size)`.
    ///
    /// An axis with no room collapses to 0.
    pub fn random_position(&self, size: f32, rng: &mut Pcg32) -> Vec2 {
        Vec2::new(
            random_coord(self.width - size, rng),
            random_coord(self.height - size, rng),
        )
    }
}

fn random_coord(span: f32, rng: &mut Pcg32) -> f32 {
    if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    }
}

/// Entity kinds, used by renderers to pick a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Coin,
    Enemy,
}

/// Anything with a position and a square footprint.
///
/// Entities are squares for collision purposes even when drawn as circles.
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Top-left corner
    fn position(&self) -> Vec2;

    /// Side length of the collision square
    fn size(&self) -> f32;

    fn center(&self) -> Vec2 {
        self.position() + Vec2::splat(self.size() / 2.0)
    }
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub life: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            life: PLAYER_LIVES,
        }
    }
}

impl Player {
    /// Move according to the pressed directions, then clamp to the board.
    ///
    /// Both axes are applied independently, so diagonal movement covers
    /// `speed * sqrt(2)` per tick.
    pub fn update(&mut self, up: bool, down: bool, left: bool, right: bool, board: &Board) {
        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }
        if left {
            self.pos.x -= self.speed;
        }
        if right {
            self.pos.x += self.speed;
        }

        self.pos.x = crate::clamp(self.pos.x, 0.0, board.width - self.width);
        self.pos.y = crate::clamp(self.pos.y, 0.0, board.height - self.height);
    }

    /// Put the player back on the spawn point
    pub fn respawn(&mut self) {
        self.pos = PLAYER_SPAWN;
    }

    /// Full reset for a new run (position and lives)
    pub fn reset(&mut self) {
        self.life = PLAYER_LIVES;
        self.respawn();
    }

    /// Take one hit. Returns true if that was the last life.
    pub fn lose_life(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.respawn();
        self.life == 0
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> f32 {
        self.width
    }

    fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: f32,
}

impl Coin {
    /// Spawn at a random position on the board
    pub fn spawn(board: &Board, rng: &mut Pcg32) -> Self {
        let mut coin = Self::at(Vec2::ZERO);
        coin.reset(board, rng);
        coin
    }

    /// Coin at a fixed position
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: COIN_SIZE,
        }
    }

    /// Relocate to a fresh random position
    pub fn reset(&mut self, board: &Board, rng: &mut Pcg32) {
        self.pos = board.random_position(self.size, rng);
    }
}

impl Entity for Coin {
    fn kind(&self) -> EntityKind {
        EntityKind::Coin
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> f32 {
        self.size
    }
}

/// An enemy that chases the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Enemy {
    /// Spawn at a random position on the board
    pub fn spawn(board: &Board, rng: &mut Pcg32) -> Self {
        Self::at(board.random_position(ENEMY_SIZE, rng))
    }

    /// Enemy at a fixed position
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: ENEMY_SIZE,
            speed: ENEMY_SPEED,
        }
    }

    /// Step `speed` units straight toward `target` (the player's center).
    ///
    /// Stays put when already centered on the target. Enemy positions are
    /// not clamped to the board.
    pub fn update(&mut self, target: Vec2) {
        let delta = target - self.center();
        let dist = crate::distance(target, self.center());

        if dist == 0.0 {
            return;
        }

        self.pos += delta / dist * self.speed;
    }
}

impl Entity for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> f32 {
        self.size
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run started
    RunStarted,
    /// A coin was picked up (new score)
    CoinCollected { score: u32 },
    /// An enemy touched the player (lives left)
    PlayerHit { life: u8 },
    /// Difficulty went up (new level, enemy count)
    LevelUp { level: u32, enemies: usize },
    /// The run ended; carries the best record to persist
    GameOver { score: u32, level: u32, best: BestRecord },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Playable area
    pub board: Board,
    /// The player (lives for the whole process, reset between runs)
    pub player: Player,
    /// Coins on the board
    pub coins: Vec<Coin>,
    /// Enemies, in spawn order; only grows during a run
    pub enemies: Vec<Enemy>,
    /// Score of the current run
    pub score: u32,
    /// Difficulty level of the current run
    pub level: u32,
    /// Best score/level across runs
    pub best: BestRecord,
    /// Ticks simulated while running
    pub time_ticks: u64,
    /// Seconds simulated during the current run
    pub run_time: f32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game sitting in the menu
    pub fn new(board: Board, seed: u64, best: BestRecord) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let coins = vec![Coin::spawn(&board, &mut rng)];

        Self {
            phase: GamePhase::Menu,
            board,
            player: Player::default(),
            coins,
            enemies: Vec::new(),
            score: 0,
            level: 1,
            best,
            time_ticks: 0,
            run_time: 0.0,
            events: Vec::new(),
            seed,
            rng,
        }
    }

    /// Default board and best record, fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Board::default(), seed, BestRecord::default())
    }

    /// Change the board size (viewport resize). Takes effect from the
    /// next tick; nothing is re-clamped here.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.board = Board::new(width, height);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn a coin at a random position
    pub fn spawn_coin(&mut self) -> Coin {
        Coin::spawn(&self.board, &mut self.rng)
    }

    /// Spawn an enemy at a random position
    pub fn spawn_enemy(&mut self) -> Enemy {
        Enemy::spawn(&self.board, &mut self.rng)
    }

    /// Move coin `index` to a fresh random position
    pub fn relocate_coin(&mut self, index: usize) {
        let board = self.board;
        if let Some(coin) = self.coins.get_mut(index) {
            coin.reset(&board, &mut self.rng);
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::with_seed(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.coins.len(), 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.player.life, 3);
        assert_eq!(state.player.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_centers() {
        let player = Player::default();
        assert_eq!(player.center(), Vec2::new(220.0, 220.0));

        let coin = Coin::at(Vec2::new(10.0, 30.0));
        assert_eq!(coin.center(), Vec2::new(20.0, 40.0));

        let enemy = Enemy::at(Vec2::new(0.0, 0.0));
        assert_eq!(enemy.center(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let board = Board::new(400.0, 300.0);
        let mut player = Player::default();

        player.update(true, false, false, true, &board);
        assert_eq!(player.pos, Vec2::new(204.0, 196.0));

        // Opposite directions cancel
        player.update(true, true, true, true, &board);
        assert_eq!(player.pos, Vec2::new(204.0, 196.0));

        player.pos = Vec2::new(358.0, 2.0);
        player.update(true, false, false, true, &board);
        assert_eq!(player.pos, Vec2::new(360.0, 0.0));

        player.pos = Vec2::new(1.0, 259.0);
        player.update(false, true, true, false, &board);
        assert_eq!(player.pos, Vec2::new(0.0, 260.0));
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let board = Board::default();
        let mut player = Player::default();
        let start = player.center();
        player.update(false, true, false, true, &board);
        let moved = crate::distance(start, player.center());
        assert!((moved - PLAYER_SPEED * 2.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut player = Player::default();
        player.pos = Vec2::new(50.0, 60.0);
        assert!(!player.lose_life());
        assert_eq!(player.pos, PLAYER_SPAWN);
        assert!(!player.lose_life());
        assert!(player.lose_life());
        assert_eq!(player.life, 0);
        assert!(player.lose_life());
        assert_eq!(player.life, 0);
    }

    #[test]
    fn test_enemy_pursues() {
        let mut enemy = Enemy::at(Vec2::new(0.0, 0.0));
        // Target straight to the right of the enemy center (20, 20)
        enemy.update(Vec2::new(120.0, 20.0));
        assert_eq!(enemy.pos, Vec2::new(2.0, 0.0));

        let mut enemy = Enemy::at(Vec2::new(0.0, 0.0));
        enemy.update(Vec2::new(50.0, 60.0));
        let moved = enemy.pos.length();
        assert!((moved - ENEMY_SPEED).abs() < 1e-4);
        assert!((enemy.pos.x / enemy.pos.y - 30.0 / 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_holds_when_coincident() {
        let mut enemy = Enemy::at(Vec2::new(200.0, 200.0));
        let player = Player::default();
        enemy.update(player.center());
        assert_eq!(enemy.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_random_positions_in_bounds() {
        let board = Board::new(300.0, 200.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let coin = Coin::spawn(&board, &mut rng);
            assert!(coin.pos.x >= 0.0 && coin.pos.x < 280.0);
            assert!(coin.pos.y >= 0.0 && coin.pos.y < 180.0);

            let enemy = Enemy::spawn(&board, &mut rng);
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x < 260.0);
            assert!(enemy.pos.y >= 0.0 && enemy.pos.y < 160.0);
        }
    }

    #[test]
    fn test_tiny_board_spawns_at_origin() {
        let board = Board::new(10.0, 10.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let enemy = Enemy::spawn(&board, &mut rng);
        assert_eq!(enemy.pos, Vec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::with_seed(42);
        let b = GameState::with_seed(42);
        assert_eq!(a.coins, b.coins);
    }
}
