//! Headless front end that plays a scripted list of moves.

use derive_more::{Display, Error, From};
use std::io::Write;
use tictactoe_match::{Board, CoordinateError, StatusMessage, Surface};
use tracing::warn;

/// Writes every surface update as plain text.
#[derive(Debug)]
pub struct ConsoleSurface<W> {
    out: W,
}

impl<W: Write> ConsoleSurface<W> {
    /// Creates a surface writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: &str) {
        // Output errors are logged, not propagated.
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "Failed to write console output");
        }
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn render_board(&mut self, board: &Board) {
        self.emit(&format!("{board}\n"));
    }

    fn show_message(&mut self, message: &StatusMessage) {
        self.emit(&format!("> {message}"));
    }

    fn set_restart_visible(&mut self, _visible: bool) {}

    fn set_name_entry_visible(&mut self, _visible: bool) {}
}

/// A scripted move that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveParseError {
    /// Not of the form `row,col`.
    #[display("Expected `row,col`, got {:?}", _0)]
    #[from(ignore)]
    Syntax(#[error(not(source))] String),
    /// Parsed but off the board.
    #[display("{}", _0)]
    OutOfRange(CoordinateError),
}

/// Parses a `row,col` move and checks it is on the board.
pub fn parse_move(text: &str) -> Result<(usize, usize), MoveParseError> {
    let syntax = || MoveParseError::Syntax(text.to_string());
    let (row, col) = text.split_once(',').ok_or_else(syntax)?;
    let row: usize = row.trim().parse().map_err(|_| syntax())?;
    let col: usize = col.trim().parse().map_err(|_| syntax())?;
    tictactoe_match::Position::from_row_col(row, col)?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0,2"), Ok((0, 2)));
        assert_eq!(parse_move(" 1 , 1 "), Ok((1, 1)));
    }

    #[test]
    fn test_parse_move_errors() {
        assert!(matches!(parse_move("11"), Err(MoveParseError::Syntax(_))));
        assert!(matches!(parse_move("a,1"), Err(MoveParseError::Syntax(_))));
        assert_eq!(
            parse_move("3,0"),
            Err(MoveParseError::OutOfRange(CoordinateError::new(3, 0)))
        );
    }

    #[test]
    fn test_console_surface_output() {
        let mut out = Vec::new();
        let mut surface = ConsoleSurface::new(&mut out);
        surface.show_message(&StatusMessage::Tie);
        surface.render_board(&Board::new());
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("> Tie!\n"));
        assert!(text.contains(".|.|."));
    }
}
