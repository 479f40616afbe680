//! Per-tick input classification.
//!
//! Each call reads the latest encoder/button state once; nothing blocks.
//! Within a single tick a turn always wins over a button edge.

use super::{classify_press, Direction, Move};
use crate::ports::{ButtonPort, EncoderPort};
use core::cmp::Ordering;

/// Edge and duration tracker over an encoder and a button.
pub struct InputSampler<E, B> {
    encoder: E,
    button: B,
    /// Encoder position at the last observed detent event.
    last_position: i32,
    /// Button level seen on the previous tick.
    was_down: bool,
    /// Timestamp of the current press edge.
    pressed_at: Option<u64>,
}

impl<E: EncoderPort, B: ButtonPort> InputSampler<E, B> {
    pub fn new(encoder: E, button: B) -> Self {
        let last_position = encoder.position();
        Self {
            encoder,
            button,
            last_position,
            was_down: false,
            pressed_at: None,
        }
    }

    /// Start a fresh observation window.
    ///
    /// Movement that happened while nobody was sampling is discarded, and
    /// press tracking starts over. A button that is already down is
    /// picked up as a new press on the next [`poll`](Self::poll).
    pub fn resync(&mut self) {
        self.encoder.poll();
        self.last_position = self.encoder.position();
        self.was_down = false;
        self.pressed_at = None;
    }

    /// One detent event, if the encoder reported one since the last call.
    pub fn poll_encoder(&mut self) -> Option<Direction> {
        if !self.encoder.poll() {
            return None;
        }

        let position = self.encoder.position();
        let direction = match position.cmp(&self.last_position) {
            Ordering::Greater => Some(Direction::Right),
            Ordering::Less => Some(Direction::Left),
            Ordering::Equal => None,
        };
        self.last_position = position;
        direction
    }

    /// Raw button level, no edge tracking.
    pub fn is_button_down(&mut self) -> bool {
        self.button.is_pressed()
    }

    /// Classify this tick.
    ///
    /// Turns are reported immediately. Presses are reported on release,
    /// as [`Move::Hold`] or [`Move::Click`] depending on how long the
    /// button was down.
    pub fn poll(&mut self, now_ms: u64) -> Option<Move> {
        if let Some(direction) = self.poll_encoder() {
            return Some(direction.into());
        }

        let down = self.is_button_down();
        let was_down = core::mem::replace(&mut self.was_down, down);
        match (was_down, down) {
            (false, true) => {
                self.pressed_at = Some(now_ms);
                None
            }
            (true, false) => self
                .pressed_at
                .take()
                .map(|start| classify_press(now_ms.saturating_sub(start))),
            _ => None,
        }
    }
}
