//! Game subsystem - rules, session bookkeeping and the state machine.
//!
//! The [`Game`] drives the screens in a fixed cycle:
//!
//! ```text
//! Menu → Countdown → RoundActive ⇄ RoundFeedback
//!   ↑                   │
//!   └── GameOver / Win ←┘
//! ```

mod machine;
mod menu;
mod session;


pub use machine::Game;
pub use menu::{select, select_next, select_prev};
pub use session::{round_limit_ms, GameSession, Verdict};

use crate::input::Move;

/// A named base time limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Difficulty {
    name: &'static str,
    base_limit_ms: u32,
}

impl Difficulty {
    pub const fn new(name: &'static str, base_limit_ms: u32) -> Self {
        Self {
            name,
            base_limit_ms,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Round limit at level 1 (ms).
    pub const fn base_limit_ms(&self) -> u32 {
        self.base_limit_ms
    }
}

/// How a single round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    Matched,
    Mismatched,
    TimedOut,
}

impl RoundOutcome {
    pub fn evaluate(target: Move, resolved: Option<Move>) -> Self {
        match resolved {
            None => RoundOutcome::TimedOut,
            Some(action) if action == target => RoundOutcome::Matched,
            Some(_) => RoundOutcome::Mismatched,
        }
    }
}

/// Screens the game can be on. In-game states carry the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Difficulty selection.
    Menu,
    /// "Get ready" pause before the first round.
    Countdown,
    /// Prompt shown, waiting for the player's move.
    RoundActive(GameSession),
    /// Missed, lives remain; waiting for acknowledgment to retry.
    RoundFeedback(GameSession),
    GameOver(GameSession),
    Win(GameSession),
}
