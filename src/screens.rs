//! Text layout of every screen.
//!
//! Screens are plain data: up to [`SCREEN_LINES`] lines of at most
//! [`LINE_CHARS`] characters, built without allocation. How they reach
//! the glass is the [`DisplayPort`](crate::ports::DisplayPort)'s business.

use crate::config::{LINE_CHARS, MAX_LEVELS, SCREEN_LINES, TITLE};
use crate::error::Error;
use crate::game::{Difficulty, GameSession};
use crate::input::Move;
use core::fmt::{self, Write};
use heapless::{String, Vec};

/// One line of screen text.
pub type Line = String<LINE_CHARS>;

/// A full frame of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<Line, SCREEN_LINES>,
}

impl Screen {
    /// Format each argument into its own line.
    pub fn from_args(args: &[fmt::Arguments<'_>]) -> Result<Self, Error> {
        let mut lines = Vec::new();
        for arg in args {
            let mut line = Line::new();
            line.write_fmt(*arg)?;
            lines.push(line).map_err(|_| Error::BufferOverflow)?;
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Round time as seconds with one decimal, e.g. `3.0s`.
struct Seconds(u32);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}s", self.0 / 1_000, (self.0 % 1_000) / 100)
    }
}

pub fn menu(difficulty: &Difficulty) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("{}", TITLE),
        format_args!("Diff: {}", difficulty.name()),
        format_args!("Turn = change"),
        format_args!("Press = start"),
    ])
}

pub fn countdown(session: &GameSession) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("Starting: {}", session.difficulty().name()),
        format_args!("Lives: {}", session.lives()),
        format_args!("Get ready..."),
        format_args!(""),
    ])
}

pub fn prompt(session: &GameSession, target: Move, limit_ms: u32) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("Lvl {}  S:{}", session.level(), session.score()),
        format_args!("Lives: {}", session.lives()),
        format_args!("Do: {}", target.label()),
        format_args!("Time: {}", Seconds(limit_ms)),
    ])
}

pub fn miss(session: &GameSession) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("Miss!"),
        format_args!("Lives left: {}", session.lives()),
        format_args!("Score: {}", session.score()),
        format_args!("Press to retry"),
    ])
}

pub fn game_over(session: &GameSession) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("GAME OVER"),
        format_args!("Level: {}", session.level()),
        format_args!("Score: {}", session.score()),
        format_args!("Press to menu"),
    ])
}

pub fn win(session: &GameSession) -> Result<Screen, Error> {
    Screen::from_args(&[
        format_args!("YOU WIN!"),
        format_args!("Score: {}", session.score()),
        format_args!("Max lvl: {}", MAX_LEVELS),
        format_args!("Press to menu"),
    ])
}
