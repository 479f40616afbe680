//! Application-wide constants and compile-time configuration.
//!
//! All game rules, timing parameters, and hardware geometry live here
//! so they can be tuned in one place. Nothing is runtime-configurable.

use crate::game::Difficulty;

// Game rules

/// Number of levels to clear for a win.
pub const MAX_LEVELS: u8 = 10;

/// Lives at the start of every game.
pub const MAX_LIVES: u8 = 3;

/// Difficulty table, selected by index from the menu.
pub const DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::new("Easy", 8_000),
    Difficulty::new("Medium", 5_000),
    Difficulty::new("Hard", 3_000),
];

/// Time removed from the round limit for every level above the first (ms).
pub const LEVEL_DECAY_MS: u32 = 200;

/// Floor for the round limit (ms).
pub const MIN_ROUND_MS: u32 = 1_500;

/// Points per cleared round are `SCORE_PER_LEVEL * level`.
pub const SCORE_PER_LEVEL: u32 = 10;

// Timing

/// Press duration at or above which a release counts as HOLD (ms).
pub const HOLD_TIME_MS: u32 = 1_000;

/// Input polling tick (ms).
pub const POLL_TICK_MS: u32 = 10;

/// Non-interactive "get ready" pause before the first round (ms).
pub const COUNTDOWN_MS: u32 = 1_500;

// Rotary encoder
//
//   Encoder A      → P0.11 (QDEC)
//   Encoder B      → P0.12 (QDEC)
//   Encoder C      → GND
//   Button         → P0.24 (other leg to GND)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// QDEC pulses (valid Gray-code transitions) per mechanical detent.
pub const ENCODER_PULSES_PER_DETENT: i32 = 4;

// Display

/// Screen lines shown at once.
pub const SCREEN_LINES: usize = 4;

/// Characters per line (128 px wide / 6 px font).
pub const LINE_CHARS: usize = 21;

/// Baseline of the first text line (px).
pub const LINE_FIRST_BASELINE: i32 = 12;

/// Vertical step between lines (px).
pub const LINE_STEP: i32 = 16;

/// Title shown on the menu screen.
pub const TITLE: &str = "Reflex Knob";
