//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything that decides the game and nothing that
//! presents it:
//!
//! - [`Board`]: nine cells, placement, win and full checks
//! - [`rules`]: the winning lines and draw detection as pure functions
//! - [`Match`]: two players, strict turn alternation and a running score
//!
//! Rendering and input belong to the adapters that own a [`Match`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Mark, Match, MoveOutcome};
//!
//! let mut game = Match::new();
//! assert_eq!(game.play(4), MoveOutcome::NextTurn(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
pub mod rules;
mod scoreboard;
mod types;

pub use board::Board;
pub use game::{InvalidMove, Match, MatchState, MoveOutcome};
pub use position::Position;
pub use scoreboard::Scoreboard;
pub use types::{Cell, Mark, Player};
