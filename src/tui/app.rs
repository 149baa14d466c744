//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::status::StatusText;
use tictactoe_core::{Match, MoveOutcome, Position};
use tracing::{debug, info};

/// Main application state.
///
/// Owns the match for the whole session; rendering reads it through
/// [`App::game`].
pub struct App {
    game: Match,
    text: StatusText,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(text: StatusText) -> Self {
        let game = Match::new();
        let status_message = text.for_state(game.state());
        Self {
            game,
            text,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Gets the status formatter.
    pub fn text(&self) -> &StatusText {
        &self.text
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cells accept activation until the round is won or drawn.
    pub fn is_board_enabled(&self) -> bool {
        self.game.is_accepting_moves()
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Restart => self.restart(),
            Action::ResetScores => self.reset_scores(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        if !self.is_board_enabled() {
            debug!(%position, "Board disabled, ignoring activation");
            return;
        }

        match self.game.play(position.to_index()) {
            MoveOutcome::Rejected(reason) => {
                debug!(%position, %reason, "Move rejected");
            }
            MoveOutcome::NextTurn(mark) => {
                self.status_message = self.text.turn(mark);
            }
            MoveOutcome::Won(mark) => {
                self.status_message = self.text.win(mark);
            }
            MoveOutcome::Draw => {
                self.status_message = self.text.draw();
            }
        }
    }

    /// Starts a new round, keeping scores.
    pub fn restart(&mut self) {
        debug!("Restarting round");
        self.game.reset();
        self.status_message = self.text.for_state(self.game.state());
    }

    /// Zeroes both scores.
    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
    }
}
