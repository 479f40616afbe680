//! Detent counting on top of a hardware quadrature decoder.
//!
//! The nRF52840 QDEC peripheral decodes and debounces the A/B lines on its
//! own and accumulates one pulse per valid Gray-code transition, even while
//! the CPU is busy. The encoder task drains that accumulator and feeds the
//! pulses here. Pulses that do not yet add up to a whole detent carry over
//! to the next read, so a half turn and back cancels out.

#[derive(Clone, Debug)]
pub struct DetentCounter {
    pulses_per_detent: i32,
    /// Pulses not yet folded into a detent, same sign as the turn.
    pulses: i32,
    position: i32,
}

impl DetentCounter {
    pub const fn new(pulses_per_detent: i32) -> Self {
        Self {
            pulses_per_detent: if pulses_per_detent < 1 { 1 } else { pulses_per_detent },
            pulses: 0,
            position: 0,
        }
    }

    /// Detent position, positive clockwise.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Add pulses read from the decoder (positive clockwise).
    ///
    /// Returns `true` when the detent position changed.
    pub fn add(&mut self, pulses: i32) -> bool {
        self.pulses += pulses;
        let detents = self.pulses / self.pulses_per_detent;
        self.pulses -= detents * self.pulses_per_detent;
        self.position += detents;
        detents != 0
    }
}
