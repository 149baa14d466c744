//! Match controller: turn order, round outcome and score.

use super::board::Board;
use super::scoreboard::Scoreboard;
use super::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the given mark to move.
    AwaitingMove(Mark),
    /// Round over, the given mark completed a line.
    Won(Mark),
    /// Round over, board full with no line.
    Draw,
}

impl MatchState {
    /// Returns true once the round is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchState::AwaitingMove(_))
    }
}

/// Why a move was not applied.
///
/// Rejected moves are an ordinary part of play: the match is left
/// untouched and the same player moves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvalidMove {
    /// Position is not on the board.
    #[display("Position {} is off the board", _0)]
    OutOfRange(usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already taken", _0)]
    Occupied(usize),
    /// Round already won or drawn.
    #[display("The round is over")]
    RoundOver,
}

/// Result of [`Match::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(InvalidMove),
    /// Move applied, the given mark is up next.
    NextTurn(Mark),
    /// Move applied and won the round.
    Won(Mark),
    /// Move applied and filled the board.
    Draw,
}

/// A session of rounds between two players.
///
/// Owns the board and the score. Player one (X) opens every round; the
/// score survives [`Match::reset`] and is only cleared by
/// [`Match::reset_scores`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    players: [Player; 2],
    current: Mark,
    state: MatchState,
    scores: Scoreboard,
}

impl Match {
    /// Creates a match with an empty board, X to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(Mark::X), Player::new(Mark::O)],
            current: Mark::X,
            state: MatchState::AwaitingMove(Mark::X),
            scores: Scoreboard::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Player holding the turn pointer.
    ///
    /// After a win this is still the winner; the pointer only moves on
    /// non-terminal moves and on reset.
    pub fn current_player(&self) -> Player {
        self.player(self.current)
    }

    /// The opening player (X).
    pub fn player1(&self) -> Player {
        self.players[0]
    }

    /// The second player (O).
    pub fn player2(&self) -> Player {
        self.players[1]
    }

    /// Player placing `mark`.
    pub fn player(&self, mark: Mark) -> Player {
        match mark {
            Mark::X => self.players[0],
            Mark::O => self.players[1],
        }
    }

    /// Session scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Wins recorded for `mark`.
    pub fn score(&self, mark: Mark) -> u32 {
        self.scores.score(mark)
    }

    /// Returns true while the round accepts moves.
    pub fn is_accepting_moves(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Plays the current player's mark at `position` (0-8).
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, position: usize) -> MoveOutcome {
        if self.state.is_terminal() {
            debug!(state = ?self.state, "Move after round end ignored");
            return MoveOutcome::Rejected(InvalidMove::RoundOver);
        }

        if position >= Board::SIZE {
            debug!("Move off the board rejected");
            return MoveOutcome::Rejected(InvalidMove::OutOfRange(position));
        }

        let mark = self.current;
        if !self.board.place_mark(position, mark) {
            debug!("Move on occupied cell rejected");
            return MoveOutcome::Rejected(InvalidMove::Occupied(position));
        }

        if let Some(winner) = self.board.check_winner() {
            self.state = MatchState::Won(winner);
            self.scores.record_win(winner);
            info!(%winner, score = self.scores.score(winner), "Round won");
            return MoveOutcome::Won(winner);
        }

        if self.board.is_full() {
            self.state = MatchState::Draw;
            info!("Round drawn");
            return MoveOutcome::Draw;
        }

        self.current = mark.opponent();
        self.state = MatchState::AwaitingMove(self.current);
        debug!(next = %self.current, "Turn passed");
        MoveOutcome::NextTurn(self.current)
    }

    /// Clears the board and hands the first move back to X. Scores stay.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Mark::X;
        self.state = MatchState::AwaitingMove(Mark::X);
        info!("New round");
    }

    /// Zeroes both scores. Board and turn stay.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("Scores reset");
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_awaits_x() {
        let game = Match::new();
        assert_eq!(game.state(), MatchState::AwaitingMove(Mark::X));
        assert_eq!(game.current_player().mark(), Mark::X);
        assert!(game.is_accepting_moves());
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Match::new();
        assert_eq!(game.play(0), MoveOutcome::NextTurn(Mark::O));
        assert_eq!(game.play(0), MoveOutcome::Rejected(InvalidMove::Occupied(0)));
        assert_eq!(game.state(), MatchState::AwaitingMove(Mark::O));
    }

    #[test]
    fn test_invalid_move_display() {
        assert_eq!(InvalidMove::Occupied(3).to_string(), "Cell 3 is already taken");
        assert_eq!(InvalidMove::RoundOver.to_string(), "The round is over");
    }
}
