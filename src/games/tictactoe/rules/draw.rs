//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (every cell marked).
///
/// Scans the whole grid rather than counting moves. A full board with no
/// winner is a tie; callers must check for a win first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    !board.cells().iter().any(Cell::is_empty)
}
