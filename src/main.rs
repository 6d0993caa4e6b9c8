//! Dodge & Collect headless host
//!
//! Composes the engine with a JSON file record store, the log renderer and
//! the autopilot, then drives it at the configured frame rate. Pass a
//! settings file path as the first argument to override the defaults.

use std::thread;
use std::time::{Duration, Instant};

use dodge_collect::Engine;
use dodge_collect::persistence::JsonFileStore;
use dodge_collect::platform::{Autopilot, SystemClock};
use dodge_collect::renderer::LogRenderer;
use dodge_collect::settings::{SETTINGS_FILE, Settings};

fn main() {
    env_logger::init();
    log::info!("Dodge & Collect (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring settings file {}: {}", path, e);
            Settings::default()
        }
    };

    if !settings.autopilot {
        log::warn!("Keyboard capture needs a windowed host; running the autopilot instead");
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(
        settings.board(),
        seed,
        JsonFileStore::new(&settings.record_path),
        LogRenderer::new(settings.log_every),
        Autopilot,
        SystemClock::new(),
    );

    let frame_time = Duration::from_secs_f64(settings.frame_time());
    while settings.max_frames == 0 || engine.frames() < settings.max_frames {
        let started = Instant::now();
        engine.frame();

        if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    let state = engine.state();
    log::info!(
        "Stopped after {} frames: phase {:?}, score {}, record {}, best level {}",
        engine.frames(),
        state.phase,
        state.score,
        state.best.record,
        state.best.best_level
    );
}
