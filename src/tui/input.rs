//! Keyboard handling for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_match::Position;

/// What the user asked for with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Leave the program.
    Quit,
    /// Mark the cell under the cursor.
    Play(Position),
    /// Clear the board for a rematch.
    Restart,
    /// Start a new match with the typed names.
    Start {
        /// Name for X.
        name1: String,
        /// Name for O.
        name2: String,
    },
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Number keys 1-9 jump straight to a cell, like a phone keypad.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            digit.checked_sub(1).and_then(Position::from_index)
        }
        _ => None,
    }
}

/// Ctrl-C quits from every screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
