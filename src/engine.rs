//! Frame driver
//!
//! The engine owns the game state and talks to the outside world only
//! through the ports it was built with: a record store, a renderer, an
//! input source and a clock. The host calls [`Engine::frame`] once per
//! display frame.

use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};
use crate::persistence::{self, RecordStore};
use crate::platform::{Clock, InputSource};
use crate::renderer::{Frame, Hud, Renderer};
use crate::sim::{self, Board, GameEvent, GamePhase, GameState, TickInput};

pub struct Engine<S, R, I, C>
where
    S: RecordStore,
    R: Renderer,
    I: InputSource,
    C: Clock,
{
    state: GameState,
    store: S,
    renderer: R,
    input: I,
    clock: C,
    last_time: Option<f64>,
    frames: u64,
    render_failures: u64,
    /// Events produced during the most recent frame
    events: Vec<GameEvent>,
}

impl<S, R, I, C> Engine<S, R, I, C>
where
    S: RecordStore,
    R: Renderer,
    I: InputSource,
    C: Clock,
{
    /// Build an engine sitting in the menu. Loads the best record from
    /// `store` (defaults when nothing usable is saved).
    pub fn new(board: Board, seed: u64, mut store: S, mut renderer: R, input: I, clock: C) -> Self {
        let best = persistence::load_best(&mut store);
        log::info!("Engine ready, board {}x{}, seed {}", board.width, board.height, seed);

        let state = GameState::new(board, seed, best);
        // Show the loaded record before any run starts
        renderer.update_hud(&Hud::capture(&state));

        Self {
            state,
            store,
            renderer,
            input,
            clock,
            last_time: None,
            frames: 0,
            render_failures: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that set up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn render_failures(&self) -> u64 {
        self.render_failures
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Viewport changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Start a run if the game is in the menu or over. Returns true if a
    /// run was started.
    pub fn request_start(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Menu | GamePhase::GameOver => {
                sim::start_game(&mut self.state);
                true
            }
            GamePhase::Running => false,
        }
    }

    /// Run one simulation tick and react to what happened
    pub fn tick(&mut self, dt: f32, input: &TickInput) {
        sim::tick(&mut self.state, input, dt);
        self.dispatch_events();
    }

    /// One full frame: input, tick, HUD, render
    pub fn frame(&mut self) {
        self.events.clear();

        let now = self.clock.now();
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).clamp(0.0, MAX_FRAME_DT),
            None => NOMINAL_DT,
        };
        self.last_time = Some(now);

        let input = self.input.poll(&self.state);
        if input.confirm {
            self.request_start();
        }

        let was_running = self.state.is_running();
        self.tick(dt, &input.tick);

        // Includes the tick that ended the run, so the final life and record show
        if was_running || self.state.is_running() {
            self.renderer.update_hud(&Hud::capture(&self.state));
        }

        self.render();
        self.frames += 1;
    }

    /// Draw the current state. Render failures stop at this boundary.
    fn render(&mut self) {
        let frame = Frame::capture(&self.state);
        if let Err(e) = self.renderer.render(&frame) {
            self.render_failures += 1;
            log::error!("Render error on frame {}: {}", self.frames, e);
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            if let GameEvent::GameOver { best, .. } = event {
                persistence::save_best(&mut self.store, best);
            }
            self.events.push(event);
        }
    }
}
