//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// Every line that wins: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark holding three in a row together with that line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.cell(a).mark()?;
        (board.cell(b).mark() == Some(mark) && board.cell(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}
