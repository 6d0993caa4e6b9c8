//! Clock sources for the frame driver

use std::time::Instant;

/// Monotonic time source, in seconds since an arbitrary origin
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
    step: f64,
}

impl ManualClock {
    /// Clock that advances by `step` seconds on every read
    pub fn stepping(step: f64) -> Self {
        Self { now: 0.0, step }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}
