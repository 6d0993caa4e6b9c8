//! Rendering boundary
//!
//! The simulation never draws. Hosts receive a read-only [`Frame`] snapshot
//! each frame plus HUD values, and turn them into pixels however they like;
//! [`scene::draw_list`] gives them the standard layout as draw commands.

pub mod log_renderer;
pub mod scene;

pub use log_renderer::LogRenderer;
pub use scene::{DrawCommand, draw_list};

use serde::Serialize;
use thiserror::Error;

use crate::sim::{Board, Entity, EntityKind, GamePhase, GameState};

/// Render failures. The engine logs these and keeps running.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,
    #[error("render backend failed: {0}")]
    Backend(String),
}

/// Position and size of one entity, for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl EntityView {
    fn of(entity: &impl Entity) -> Self {
        let pos = entity.position();
        Self {
            kind: entity.kind(),
            x: pos.x,
            y: pos.y,
            size: entity.size(),
        }
    }
}

/// HUD values shown next to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub life: u8,
    pub record: u32,
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score,
            life: state.player.life,
            record: state.best.record,
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn life_text(&self) -> String {
        format!("Life: {}", self.life)
    }

    pub fn record_text(&self) -> String {
        format!("Record: {}", self.record)
    }
}

/// Read-only snapshot of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub board: Board,
    pub hud: Hud,
    pub level: u32,
    pub best_level: u32,
    /// Player first, then coins, then enemies
    pub entities: Vec<EntityView>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let mut entities = Vec::with_capacity(1 + state.coins.len() + state.enemies.len());
        entities.push(EntityView::of(&state.player));
        entities.extend(state.coins.iter().map(EntityView::of));
        entities.extend(state.enemies.iter().map(EntityView::of));

        Self {
            phase: state.phase,
            board: state.board,
            hud: Hud::capture(state),
            level: state.level,
            best_level: state.best.best_level,
            entities,
        }
    }
}

/// Drawing port implemented by hosts
pub trait Renderer {
    /// Draw one frame
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;

    /// Refresh HUD text (only called while a run is in progress)
    fn update_hud(&mut self, _hud: &Hud) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        (**self).render(frame)
    }

    fn update_hud(&mut self, hud: &Hud) {
        (**self).update_hud(hud)
    }
}
