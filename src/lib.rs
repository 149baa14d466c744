//! Two-player tic-tac-toe front ends.
//!
//! The game itself lives in [`tictactoe_core`]; this crate wires it to a
//! terminal:
//!
//! - **TUI**: click or key-driven board with a running score ([`tui`])
//! - **Console**: a single round over a text prompt ([`console`])
//! - **Config**: player names and log settings from TOML ([`config`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod logging;
pub mod status;
pub mod tui;

pub use config::{ConfigError, GameConfig, LogConfig, PlayerNames};
pub use console::{ConsoleError, ConsoleGame, RoundEnd};
pub use status::StatusText;
pub use tictactoe_core::{
    Board, Cell, InvalidMove, Mark, Match, MatchState, MoveOutcome, Position,
};
