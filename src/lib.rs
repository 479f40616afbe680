//! Reflex Knob - a rotary-encoder reaction game.
//!
//! The screen asks for one of four moves (click, hold, turn left, turn
//! right) and the player has a shrinking time window to do it. Three
//! misses end the game; clearing ten levels wins it.
//!
//! This crate holds everything that can run on the host: input
//! classification, timed waits, game rules, the state machine and screen
//! layout. Hardware is reached only through the traits in [`ports`].
//!
//! Usage: `cargo test` (host) or
//! `cargo run --release --features embedded --target thumbv7em-none-eabihf`
//! (flashes through the probe-rs runner in `.cargo/config.toml`)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and provides the Embassy-backed port implementations.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ports;
pub mod screens;

#[cfg(test)]
mod bench;

pub use error::Error;
pub use game::{Game, State};
pub use input::{Direction, Move};
