//! Error types for board addressing.

use derive_more::{Display, Error};

/// Row or column outside the 3x3 grid.
///
/// Raised by every `(row, col)` entry point before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinates ({}, {}) are outside the 3x3 board", row, col)]
pub struct CoordinateError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl CoordinateError {
    /// Creates a new coordinate error.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
