//! Unified error type for reflex-knob.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Wrong moves and timeouts are not errors; they are
//! [`RoundOutcome`](crate::game::RoundOutcome)s.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed, or the driver rejected a command.
    Display,

    /// Screen text did not fit the line or line-count bounds.
    BufferOverflow,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
