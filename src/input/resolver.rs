//! Timed waits on top of the [`InputSampler`].
//!
//! Every wait is a polling loop that samples once per
//! [`POLL_TICK_MS`](crate::config::POLL_TICK_MS) and sleeps in between, so
//! the executor stays responsive and the core never spins flat out.
//! Calls take `&mut self`, which rules out overlapping waits.

use super::{InputSampler, MenuInput, Move};
use crate::config::POLL_TICK_MS;
use crate::ports::{ButtonPort, Clock, EncoderPort};
use embedded_hal_async::delay::DelayNs;

pub struct MoveResolver<E, B, C, D> {
    sampler: InputSampler<E, B>,
    clock: C,
    delay: D,
}

impl<E, B, C, D> MoveResolver<E, B, C, D>
where
    E: EncoderPort,
    B: ButtonPort,
    C: Clock,
    D: DelayNs,
{
    pub fn new(sampler: InputSampler<E, B>, clock: C, delay: D) -> Self {
        Self {
            sampler,
            clock,
            delay,
        }
    }

    /// Wait up to `limit_ms` for the first classified move.
    ///
    /// Returns `None` on timeout. Input from before the call is ignored.
    pub async fn wait_for_move(&mut self, limit_ms: u32) -> Option<Move> {
        let start = self.clock.now_ms();
        self.sampler.resync();

        while self.clock.now_ms().saturating_sub(start) < u64::from(limit_ms) {
            if let Some(action) = self.sampler.poll(self.clock.now_ms()) {
                return Some(action);
            }
            self.tick().await;
        }
        None
    }

    /// Block until the button is pressed and released.
    pub async fn wait_for_acknowledgment(&mut self) {
        while !self.sampler.is_button_down() {
            self.tick().await;
        }
        self.wait_for_release().await;
    }

    /// Block until the menu has something to react to.
    ///
    /// A press only counts as [`MenuInput::Start`] once released.
    pub async fn next_menu_input(&mut self) -> MenuInput {
        loop {
            if let Some(direction) = self.sampler.poll_encoder() {
                return MenuInput::Turn(direction);
            }
            if self.sampler.is_button_down() {
                self.wait_for_release().await;
                return MenuInput::Start;
            }
            self.tick().await;
        }
    }

    /// Forget input that happened while nobody was listening.
    pub fn resync(&mut self) {
        self.sampler.resync();
    }

    /// Non-interactive pause.
    pub async fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    async fn wait_for_release(&mut self) {
        while self.sampler.is_button_down() {
            self.tick().await;
        }
    }

    async fn tick(&mut self) {
        self.delay.delay_ms(POLL_TICK_MS).await;
    }
}
