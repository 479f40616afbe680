//! Per-game bookkeeping: level, lives and score.

use super::{Difficulty, RoundOutcome};
use crate::config::{
    DIFFICULTIES, LEVEL_DECAY_MS, MAX_LEVELS, MAX_LIVES, MIN_ROUND_MS, SCORE_PER_LEVEL,
};

/// Round time limit: shrinks by [`LEVEL_DECAY_MS`] per level, never below
/// [`MIN_ROUND_MS`].
pub fn round_limit_ms(difficulty: &Difficulty, level: u8) -> u32 {
    let decay = u32::from(level.saturating_sub(1)) * LEVEL_DECAY_MS;
    difficulty
        .base_limit_ms()
        .saturating_sub(decay)
        .max(MIN_ROUND_MS)
}

/// What the state machine should do after a round was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Matched, next level.
    Advance,
    /// Matched the last level.
    Won,
    /// Missed, lives remain.
    Retry,
    /// Missed the last life.
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    difficulty_index: usize,
    level: u8,
    lives: u8,
    score: u32,
}

impl GameSession {
    /// Fresh game at level 1 with full lives.
    ///
    /// Out-of-range indices wrap into the difficulty table.
    pub fn new(difficulty_index: usize) -> Self {
        Self {
            difficulty_index: difficulty_index % DIFFICULTIES.len(),
            level: 1,
            lives: MAX_LIVES,
            score: 0,
        }
    }

    pub fn difficulty_index(&self) -> usize {
        self.difficulty_index
    }

    pub fn difficulty(&self) -> &'static Difficulty {
        &DIFFICULTIES[self.difficulty_index]
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time allowed for the current round (ms).
    pub fn round_limit_ms(&self) -> u32 {
        round_limit_ms(self.difficulty(), self.level)
    }

    /// Apply a round result.
    ///
    /// A match scores `10 * level` and advances; anything else costs
    /// exactly one life and keeps the level.
    pub fn record(&mut self, outcome: RoundOutcome) -> Verdict {
        match outcome {
            RoundOutcome::Matched => {
                self.score += SCORE_PER_LEVEL * u32::from(self.level);
                self.level += 1;
                if self.level > MAX_LEVELS {
                    Verdict::Won
                } else {
                    Verdict::Advance
                }
            }
            RoundOutcome::Mismatched | RoundOutcome::TimedOut => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives > 0 {
                    Verdict::Retry
                } else {
                    Verdict::Lost
                }
            }
        }
    }
}
