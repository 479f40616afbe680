//! The game loop.
//!
//! One [`Game::step`] runs one state to completion (drawing its screen
//! and waiting for whatever input ends it) and moves to the next state.
//! [`Game::run`] just steps forever.

use super::menu;
use super::{GameSession, RoundOutcome, State, Verdict};
use crate::config::{COUNTDOWN_MS, DIFFICULTIES};
use crate::error::Error;
use crate::input::{MenuInput, Move, MoveResolver};
use crate::ports::{ButtonPort, Clock, DisplayPort, EncoderPort};
use crate::screens::{self, Screen};
use embedded_hal_async::delay::DelayNs;
use rand_core::RngCore;

pub struct Game<E, B, C, D, S, R> {
    input: MoveResolver<E, B, C, D>,
    display: S,
    rng: R,
    /// Menu cursor; survives across games.
    difficulty_index: usize,
    state: State,
}

impl<E, B, C, D, S, R> Game<E, B, C, D, S, R>
where
    E: EncoderPort,
    B: ButtonPort,
    C: Clock,
    D: DelayNs,
    S: DisplayPort,
    R: RngCore,
{
    pub fn new(input: MoveResolver<E, B, C, D>, display: S, rng: R) -> Self {
        Self {
            input,
            display,
            rng,
            difficulty_index: 0,
            state: State::Menu,
        }
    }

    #[cfg(test)]
    pub(super) fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Currently selected difficulty index.
    pub fn difficulty_index(&self) -> usize {
        self.difficulty_index
    }

    /// Run the game forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.step().await;
        }
    }

    /// Run the current state and advance to the next one.
    pub async fn step(&mut self) {
        let current = self.state;
        let next = match current {
            State::Menu => self.menu().await,
            State::Countdown => self.countdown().await,
            State::RoundActive(session) => self.round(session).await,
            State::RoundFeedback(session) => {
                self.render(screens::miss(&session));
                self.input.wait_for_acknowledgment().await;
                State::RoundActive(session)
            }
            State::GameOver(session) => {
                self.render(screens::game_over(&session));
                self.input.wait_for_acknowledgment().await;
                State::Menu
            }
            State::Win(session) => {
                self.render(screens::win(&session));
                self.input.wait_for_acknowledgment().await;
                State::Menu
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Game: {} -> {}", current, next);
        self.state = next;
    }

    async fn menu(&mut self) -> State {
        self.input.resync();
        self.render_menu();

        loop {
            match self.input.next_menu_input().await {
                MenuInput::Turn(direction) => {
                    self.difficulty_index =
                        menu::select(self.difficulty_index, direction, DIFFICULTIES.len());
                    self.render_menu();
                }
                MenuInput::Start => return State::Countdown,
            }
        }
    }

    async fn countdown(&mut self) -> State {
        let session = GameSession::new(self.difficulty_index);

        #[cfg(feature = "defmt")]
        defmt::info!("New game: {}", session.difficulty().name());

        self.render(screens::countdown(&session));
        self.input.pause(COUNTDOWN_MS).await;
        State::RoundActive(session)
    }

    async fn round(&mut self, mut session: GameSession) -> State {
        let limit_ms = session.round_limit_ms();
        let target = Move::random(&mut self.rng);

        // Drawn once; nothing is redrawn while the timer runs.
        self.render(screens::prompt(&session, target, limit_ms));
        let resolved = self.input.wait_for_move(limit_ms).await;
        let outcome = RoundOutcome::evaluate(target, resolved);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Level {}: wanted {}, got {} -> {}",
            session.level(),
            target,
            resolved,
            outcome
        );

        match session.record(outcome) {
            Verdict::Advance => State::RoundActive(session),
            Verdict::Won => State::Win(session),
            Verdict::Retry => State::RoundFeedback(session),
            Verdict::Lost => State::GameOver(session),
        }
    }

    fn render_menu(&mut self) {
        let difficulty = &DIFFICULTIES[self.difficulty_index];
        self.render(screens::menu(difficulty));
    }

    /// Show a laid-out screen; a layout failure keeps the previous frame.
    fn render(&mut self, screen: Result<Screen, Error>) {
        match screen {
            Ok(screen) => self.display.show(&screen),
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Screen layout failed: {}", _err);
            }
        }
    }
}
