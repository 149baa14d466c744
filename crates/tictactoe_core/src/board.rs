//! The 3x3 board.

use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only go from empty to occupied through [`Board::place_mark`];
/// the only way back is [`Board::reset`], which clears all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `position`, `None` if out of range.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Returns true if `position` is on the board and empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Places `mark` at `position`.
    ///
    /// Returns `false` without touching the board when the position is
    /// out of range or already occupied.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, position: usize, mark: Mark) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(mark);
                true
            }
            Some(_) => {
                debug!("Cell already occupied");
                false
            }
            None => {
                debug!("Position out of range");
                false
            }
        }
    }

    /// Mark on the first completed winning line, if any.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns true when every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as text; empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}
