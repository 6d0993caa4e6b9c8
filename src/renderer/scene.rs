//! Draw list generation for the three screens

use glam::Vec2;
use serde::Serialize;

use super::{EntityView, Frame};
use crate::sim::{EntityKind, GamePhase};

pub const BACKGROUND: [f32; 4] = [0.11, 0.106, 0.106, 1.0]; // #1c1b1b
pub const TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const PLAYER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const COIN_COLOR: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
pub const ENEMY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

pub const TITLE_FONT_SIZE: f32 = 40.0;
pub const PROMPT_FONT_SIZE: f32 = 24.0;

/// A single primitive for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Fill the whole board
    Clear { color: [f32; 4] },
    /// Axis-aligned filled rectangle (top-left origin)
    Rect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Horizontally centered text
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

fn entity_command(view: &EntityView) -> DrawCommand {
    let pos = Vec2::new(view.x, view.y);
    match view.kind {
        EntityKind::Coin => DrawCommand::Circle {
            center: pos + Vec2::splat(view.size / 2.0),
            radius: view.size / 2.0,
            color: COIN_COLOR,
        },
        EntityKind::Player => DrawCommand::Rect {
            pos,
            size: Vec2::splat(view.size),
            color: PLAYER_COLOR,
        },
        EntityKind::Enemy => DrawCommand::Rect {
            pos,
            size: Vec2::splat(view.size),
            color: ENEMY_COLOR,
        },
    }
}

fn title_screen(frame: &Frame, title: &str, prompt: &str, out: &mut Vec<DrawCommand>) {
    let mid = Vec2::new(frame.board.width / 2.0, frame.board.height / 2.0);
    out.push(DrawCommand::Text {
        text: title.to_string(),
        pos: mid - Vec2::new(0.0, 40.0),
        size: TITLE_FONT_SIZE,
        color: TEXT_COLOR,
    });
    out.push(DrawCommand::Text {
        text: prompt.to_string(),
        pos: mid + Vec2::new(0.0, 10.0),
        size: PROMPT_FONT_SIZE,
        color: TEXT_COLOR,
    });
}

/// Build the draw commands for a frame
pub fn draw_list(frame: &Frame) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Clear { color: BACKGROUND }];

    match frame.phase {
        GamePhase::Menu => {
            title_screen(frame, "DODGE & COLLECT", "PRESS ENTER TO START", &mut out)
        }
        GamePhase::GameOver => {
            title_screen(frame, "GAME OVER", "PRESS ENTER TO RESTART", &mut out)
        }
        GamePhase::Running => out.extend(frame.entities.iter().map(entity_command)),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, start_game};

    #[test]
    fn test_menu_screen() {
        let state = GameState::with_seed(2);
        let cmds = draw_list(&Frame::capture(&state));
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
        match &cmds[1] {
            DrawCommand::Text { text, pos, size, .. } => {
                assert_eq!(text, "DODGE & COLLECT");
                assert_eq!(*pos, Vec2::new(400.0, 260.0));
                assert_eq!(*size, TITLE_FONT_SIZE);
            }
            other => panic!("expected title text, got {:?}", other),
        }
    }

    #[test]
    fn test_game_over_screen_hides_entities() {
        let mut state = GameState::with_seed(2);
        start_game(&mut state);
        crate::sim::game_over(&mut state);
        let cmds = draw_list(&Frame::capture(&state));
        assert_eq!(cmds.len(), 3);
        assert!(matches!(&cmds[1], DrawCommand::Text { text, .. } if text == "GAME OVER"));
        assert!(matches!(
            &cmds[2],
            DrawCommand::Text { text, .. } if text == "PRESS ENTER TO RESTART"
        ));
    }

    #[test]
    fn test_running_screen_shapes() {
        let mut state = GameState::with_seed(2);
        start_game(&mut state);
        let cmds = draw_list(&Frame::capture(&state));
        // Clear + player + coin + enemy
        assert_eq!(cmds.len(), 4);
        assert_eq!(
            cmds[1],
            DrawCommand::Rect {
                pos: Vec2::new(200.0, 200.0),
                size: Vec2::splat(40.0),
                color: PLAYER_COLOR,
            }
        );
        assert!(matches!(
            cmds[2],
            DrawCommand::Circle { radius, color, .. } if radius == 10.0 && color == COIN_COLOR
        ));
        assert!(matches!(cmds[3], DrawCommand::Rect { color, .. } if color == ENEMY_COLOR));
    }
}
