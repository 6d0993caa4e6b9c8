//! Headless renderer that reports frames through the log

use super::{Frame, Hud, RenderError, Renderer, draw_list};

/// Logs a one-line frame summary every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
    last_hud: Option<Hud>,
    /// Number of draw commands in the most recent frame
    pub last_draw_count: usize,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last_hud: None,
            last_draw_count: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let commands = draw_list(frame);
        self.last_draw_count = commands.len();
        self.frames += 1;

        if self.frames % self.every == 0 {
            log::debug!(
                "frame {}: {:?}, level {}, {} entities, {} draw commands",
                self.frames,
                frame.phase,
                frame.level,
                frame.entities.len(),
                commands.len()
            );
        }
        Ok(())
    }

    fn update_hud(&mut self, hud: &Hud) {
        if self.last_hud != Some(*hud) {
            log::info!(
                "{} | {} | {}",
                hud.score_text(),
                hud.life_text(),
                hud.record_text()
            );
            self.last_hud = Some(*hud);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, start_game};

    #[test]
    fn test_counts_frames_and_commands() {
        let mut state = GameState::with_seed(4);
        let mut renderer = LogRenderer::new(0);

        renderer.render(&Frame::capture(&state)).unwrap();
        assert_eq!(renderer.last_draw_count, 3);

        start_game(&mut state);
        renderer.render(&Frame::capture(&state)).unwrap();
        assert_eq!(renderer.last_draw_count, 4);
        assert_eq!(renderer.frames(), 2);
    }
}
