//! Hardware boundary of the game core.
//!
//! The core never touches GPIO, I²C or timers directly. The firmware
//! binary implements these traits on top of Embassy; host tests implement
//! them on a simulated bench.
//!
//! Sleeping is not part of this module: waits use
//! [`embedded_hal_async::delay::DelayNs`], which `embassy_time::Delay`
//! already implements.

use crate::screens::Screen;

/// Latest state reported by the encoder decoding collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderState {
    /// Detent position (increases clockwise).
    pub position: i32,
    /// A new detent event is available since the last check.
    pub updated: bool,
}

impl EncoderState {
    pub const fn new() -> Self {
        Self {
            position: 0,
            updated: false,
        }
    }
}

/// Quantized rotary encoder.
pub trait EncoderPort {
    /// Returns `true` when the position changed since the previous call,
    /// clearing the flag.
    fn poll(&mut self) -> bool;

    /// Current detent position.
    fn position(&self) -> i32;
}

/// Push button, already mapped to "pressed" regardless of wiring polarity.
pub trait ButtonPort {
    fn is_pressed(&mut self) -> bool;
}

/// Text sink for up to [`SCREEN_LINES`](crate::config::SCREEN_LINES) lines.
///
/// Replaces everything previously shown. Must complete before the next
/// input sample; failures are the implementation's to log.
pub trait DisplayPort {
    fn show(&mut self, screen: &Screen);
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}
