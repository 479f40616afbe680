//! Simulated hardware for host tests.
//!
//! A [`Bench`] owns a virtual clock and scripted encoder/button timelines.
//! Delays advance the clock instantly, so async code driven with
//! `embassy_futures::block_on` runs to completion without real sleeping.
//!
//! Inputs can be scheduled at absolute times ([`Bench::turn_at`],
//! [`Bench::press_at`]) or as reactions to screens ([`Bench::respond`]):
//! every time the display is drawn, the next queued [`Response`] is
//! scheduled relative to that moment, like a player reacting to it.
//! [`Bench::follow_prompts`] replaces the queue with a player who reads
//! each screen and always does the right thing.

use crate::ports::{ButtonPort, Clock, DisplayPort, EncoderPort, EncoderState};
use crate::screens::Screen;
use embedded_hal_async::delay::DelayNs;
use rand_core::RngCore;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Reaction delay between a screen appearing and the player acting.
pub const REACTION_MS: u64 = 50;

/// Button down time for a click or acknowledgment.
pub const CLICK_MS: u64 = 100;

/// Button down time for a hold.
pub const HOLD_MS: u64 = 1_200;

/// Virtual time after which the bench assumes a wait never ends.
const STALL_LIMIT_MS: u64 = 3_600_000;

/// What the simulated player does after a screen is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Idle,
    Click,
    Hold,
    Left,
    Right,
    /// Press and release to acknowledge a screen.
    Ack,
}

#[derive(Default)]
struct BenchState {
    now_ns: u64,
    /// (time, detent delta)
    turns: Vec<(u64, i32)>,
    /// [down, up) intervals
    presses: Vec<(u64, u64)>,
    encoder: EncoderState,
    screens: Vec<Vec<String>>,
    responses: VecDeque<Response>,
    follow_prompts: bool,
}

impl BenchState {
    fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    fn advance_ns(&mut self, ns: u64) {
        self.now_ns += ns;
        assert!(
            self.now_ms() < STALL_LIMIT_MS,
            "bench stalled: waited past {} ms of virtual time",
            STALL_LIMIT_MS
        );
    }

    /// What a player who follows every prompt does on `lines`.
    fn read_screen(lines: &[String]) -> Response {
        let prompt = lines.get(2).and_then(|line| line.strip_prefix("Do: "));
        match prompt {
            Some("CLICK") => Response::Click,
            Some("HOLD") => Response::Hold,
            Some("TURN L") => Response::Left,
            Some("TURN R") => Response::Right,
            Some(other) => panic!("unknown prompt {:?}", other),
            None if lines.first().is_some_and(|t| t.starts_with("Starting")) => Response::Idle,
            None => Response::Ack,
        }
    }

    fn schedule(&mut self, response: Response) {
        let at = self.now_ms() + REACTION_MS;
        match response {
            Response::Idle => {}
            Response::Click | Response::Ack => self.presses.push((at, at + CLICK_MS)),
            Response::Hold => self.presses.push((at, at + HOLD_MS)),
            Response::Left => self.turns.push((at, -1)),
            Response::Right => self.turns.push((at, 1)),
        }
    }
}

/// Shared handle to the simulated board.
#[derive(Clone, Default)]
pub struct Bench {
    state: Rc<RefCell<BenchState>>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoder(&self) -> BenchEncoder {
        BenchEncoder(self.clone())
    }

    pub fn button(&self) -> BenchButton {
        BenchButton(self.clone())
    }

    pub fn clock(&self) -> BenchClock {
        BenchClock(self.clone())
    }

    pub fn display(&self) -> BenchDisplay {
        BenchDisplay(self.clone())
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms()
    }

    pub fn advance_ms(&self, ms: u64) {
        self.state.borrow_mut().advance_ns(ms * 1_000_000);
    }

    /// Move the encoder by `detents` at `at_ms`.
    pub fn turn_at(&self, at_ms: u64, detents: i32) {
        self.state.borrow_mut().turns.push((at_ms, detents));
    }

    /// Hold the button down over `[down_ms, up_ms)`.
    pub fn press_at(&self, down_ms: u64, up_ms: u64) {
        self.state.borrow_mut().presses.push((down_ms, up_ms));
    }

    /// Queue reactions, one per future screen draw.
    pub fn respond(&self, responses: &[Response]) {
        self.state.borrow_mut().responses.extend(responses.iter().copied());
    }

    /// React to every screen as a perfect player instead of the queue.
    pub fn follow_prompts(&self) {
        self.state.borrow_mut().follow_prompts = true;
    }

    pub fn screens(&self) -> Vec<Vec<String>> {
        self.state.borrow().screens.clone()
    }

    pub fn last_screen(&self) -> Vec<String> {
        self.state.borrow().screens.last().cloned().unwrap_or_default()
    }
}

pub struct BenchEncoder(Bench);

impl EncoderPort for BenchEncoder {
    fn poll(&mut self) -> bool {
        let mut state = self.0.state.borrow_mut();
        let now = state.now_ms();
        let target: i32 = state
            .turns
            .iter()
            .filter(|(at, _)| *at <= now)
            .map(|(_, delta)| delta)
            .sum();
        if target != state.encoder.position {
            state.encoder.position = target;
            state.encoder.updated = true;
        }
        core::mem::take(&mut state.encoder.updated)
    }

    fn position(&self) -> i32 {
        self.0.state.borrow().encoder.position
    }
}

pub struct BenchButton(Bench);

impl ButtonPort for BenchButton {
    fn is_pressed(&mut self) -> bool {
        let state = self.0.state.borrow();
        let now = state.now_ms();
        state
            .presses
            .iter()
            .any(|&(down, up)| down <= now && now < up)
    }
}

pub struct BenchClock(Bench);

impl Clock for BenchClock {
    fn now_ms(&self) -> u64 {
        self.0.now_ms()
    }
}

impl DelayNs for BenchClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.state.borrow_mut().advance_ns(u64::from(ns));
    }
}

pub struct BenchDisplay(Bench);

impl DisplayPort for BenchDisplay {
    fn show(&mut self, screen: &Screen) {
        let mut state = self.0.state.borrow_mut();
        let lines: Vec<String> = screen.lines().iter().map(|l| l.as_str().to_string()).collect();
        let response = if state.follow_prompts {
            BenchState::read_screen(&lines)
        } else {
            state.responses.pop_front().unwrap_or(Response::Idle)
        };
        state.screens.push(lines);
        state.schedule(response);
    }
}

/// Deterministic [`RngCore`] cycling through fixed values.
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
