//! Session score counters.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Wins per mark across the rounds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Adds one win for `mark`.
    pub fn record_win(&mut self, mark: Mark) {
        let counter = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *counter = counter.saturating_add(1);
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
