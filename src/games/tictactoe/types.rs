//! Core domain types for tic-tac-toe.

use super::error::CoordinateError;
use super::position::Position;
use super::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First mark (moves first).
    X,
    /// Second mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single grid position holding zero or one mark.
///
/// Once marked, a cell keeps its mark until the whole board is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    mark: Option<Mark>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark in this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    /// Sets the mark if the cell is empty. Returns whether it was set.
    pub(crate) fn add_mark(&mut self, mark: Mark) -> bool {
        if self.mark.is_some() {
            return false;
        }
        self.mark = Some(mark);
        true
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if either coordinate is outside 0-2.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, CoordinateError> {
        Ok(self.cell(Position::from_row_col(row, col)?))
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Places `mark` at `pos` unless the cell is already marked.
    ///
    /// Never overwrites. Returns whether the mark was placed.
    pub fn place_mark(&mut self, pos: Position, mark: Mark) -> bool {
        self.cells[pos.index()].add_mark(mark)
    }

    /// Places `mark` at `(row, col)` unless the cell is already marked.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if either coordinate is outside 0-2.
    pub fn place_mark_at(
        &mut self,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<bool, CoordinateError> {
        Ok(self.place_mark(Position::from_row_col(row, col)?, mark))
    }

    /// Replaces every cell with a fresh empty one.
    pub fn reset(&mut self) {
        self.cells = [Cell::new(); 9];
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Grid snapshot, one array per row.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// The winning mark and its line, if any line is complete.
    pub fn winner(&self) -> Option<(Mark, [Position; 3])> {
        rules::check_winner(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| match cell.mark() {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A participant: display name plus the mark they play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
