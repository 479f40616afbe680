//! Input subsystem - rotary encoder + push button.
//!
//! ## Components
//!
//! - **Detent**: folds hardware-decoded quadrature pulses into detent
//!   positions (runs in the firmware's encoder task)
//! - **Sampler**: classifies one tick of encoder/button state into a [`Move`]
//! - **Resolver**: bounded and unbounded waits built on the sampler

pub mod detent;
pub mod resolver;
pub mod sampler;

pub use resolver::MoveResolver;
pub use sampler::InputSampler;

use crate::config::HOLD_TIME_MS;
use rand_core::RngCore;

/// Rotation direction of one detent event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Right,
}

/// A classified player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Move {
    Click,
    Hold,
    TurnLeft,
    TurnRight,
}

impl Move {
    /// All moves, in prompt-table order.
    pub const ALL: [Move; 4] = [Move::Click, Move::Hold, Move::TurnLeft, Move::TurnRight];

    /// Uniformly pick a prompt target.
    pub fn random(rng: &mut impl RngCore) -> Self {
        // 4 divides 2^32, so the modulo is unbiased.
        Self::ALL[(rng.next_u32() % Self::ALL.len() as u32) as usize]
    }

    /// Label shown on the prompt screen.
    pub const fn label(self) -> &'static str {
        match self {
            Move::Click => "CLICK",
            Move::Hold => "HOLD",
            Move::TurnLeft => "TURN L",
            Move::TurnRight => "TURN R",
        }
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Move::TurnLeft,
            Direction::Right => Move::TurnRight,
        }
    }
}

/// What the menu screen reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuInput {
    Turn(Direction),
    /// Button pressed and released.
    Start,
}

/// Classify a completed press by how long the button was down.
pub fn classify_press(duration_ms: u64) -> Move {
    if duration_ms >= u64::from(HOLD_TIME_MS) {
        Move::Hold
    } else {
        Move::Click
    }
}
