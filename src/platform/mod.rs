//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (raw key names -> logical directions)
//! - Time/ticks

pub mod input;
pub mod time;

pub use input::{Autopilot, Direction, FrameInput, InputSource, InputTracker, autopilot};
pub use time::{Clock, ManualClock, SystemClock};
