//! Rotary encoder on the QDEC peripheral.
//!
//! The hardware decoder samples and debounces the A/B lines and keeps
//! accumulating pulses while the game task is busy (a display flush
//! blocks the executor for tens of milliseconds). This task drains the
//! accumulator, folds it into detents and publishes the latest
//! [`EncoderState`] for [`SharedEncoder`].

use core::cell::Cell;
use defmt::debug;
use embassy_nrf::peripherals::QDEC;
use embassy_nrf::qdec::Qdec;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use reflex_knob::config::ENCODER_PULSES_PER_DETENT;
use reflex_knob::input::detent::DetentCounter;
use reflex_knob::ports::{EncoderPort, EncoderState};

/// Written by [`encoder_task`], read by [`SharedEncoder`].
static ENCODER: Mutex<CriticalSectionRawMutex, Cell<EncoderState>> =
    Mutex::new(Cell::new(EncoderState::new()));

/// Drain the decoder forever.
#[embassy_executor::task]
pub async fn encoder_task(mut qdec: Qdec<'static, QDEC>) {
    let mut counter = DetentCounter::new(ENCODER_PULSES_PER_DETENT);

    loop {
        // Resolves once the decoder has a non-zero report.
        let pulses = qdec.read().await;
        if counter.add(i32::from(pulses)) {
            let position = counter.position();
            debug!("Knob: position {}", position);
            ENCODER.lock(|state| {
                state.set(EncoderState {
                    position,
                    updated: true,
                })
            });
        }
    }
}

/// Game-side view of the encoder task's output.
pub struct SharedEncoder;

impl EncoderPort for SharedEncoder {
    fn poll(&mut self) -> bool {
        ENCODER.lock(|state| {
            let current = state.get();
            state.set(EncoderState {
                updated: false,
                ..current
            });
            current.updated
        })
    }

    fn position(&self) -> i32 {
        ENCODER.lock(|state| state.get().position)
    }
}
