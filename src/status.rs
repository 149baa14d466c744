//! Status and score text shared by both front ends.

use crate::config::PlayerNames;
use tictactoe_core::{Mark, Match, MatchState};

/// Formats match events using the configured player names.
#[derive(Debug, Clone, Default)]
pub struct StatusText {
    names: PlayerNames,
}

impl StatusText {
    /// Creates a formatter for `names`.
    pub fn new(names: PlayerNames) -> Self {
        Self { names }
    }

    /// Name of the player placing `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        self.names.name(mark)
    }

    /// `Player X's turn`
    pub fn turn(&self, mark: Mark) -> String {
        format!("{}'s turn", self.name(mark))
    }

    /// `Player X wins!`
    pub fn win(&self, mark: Mark) -> String {
        format!("{} wins!", self.name(mark))
    }

    /// `It's a draw!`
    pub fn draw(&self) -> String {
        "It's a draw!".to_string()
    }

    /// `Player X Score: 2`
    pub fn score(&self, game: &Match, mark: Mark) -> String {
        format!("{} Score: {}", self.name(mark), game.scores().score(mark))
    }

    /// Message describing the current round state.
    pub fn for_state(&self, state: MatchState) -> String {
        match state {
            MatchState::AwaitingMove(mark) => self.turn(mark),
            MatchState::Won(mark) => self.win(mark),
            MatchState::Draw => self.draw(),
        }
    }
}
