//! Board-side user interface - OLED display, push button, rotary encoder.
//!
//! These are the Embassy-backed implementations of the game's
//! [`ports`](reflex_knob::ports). Only the firmware binary builds them.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Button**: one tactile switch, active-low with internal pull-up
//! - **Knob**: mechanical rotary encoder on the QDEC peripheral, drained by its own task

pub mod buttons;
pub mod display;
pub mod knob;

use embassy_time::Instant;
use reflex_knob::ports::Clock;

/// Embassy uptime as the game's monotonic clock.
pub struct Uptime;

impl Clock for Uptime {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
