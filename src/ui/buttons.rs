//! GPIO push button.
//!
//! Active-low with internal pull-up. No debouncing here: the game samples
//! once per tick, which is slower than the switch bounces.

use embassy_nrf::gpio::Input;
use reflex_knob::ports::ButtonPort;

pub struct PushButton {
    pin: Input<'static>,
}

impl PushButton {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl ButtonPort for PushButton {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}
