//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). Rules are kept
//! apart from board storage so the match controller and tests can call
//! them directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};
