//! Terminal surface state.

use super::input::{Intent, digit_position, is_interrupt, move_cursor};
use crossterm::event::{KeyCode, KeyEvent};
use tictactoe_match::{Board, Position, StatusMessage, Surface};
use tracing::debug;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing player names.
    Names,
    /// Moving over the grid.
    Board,
}

/// Everything the terminal needs to draw one frame.
#[derive(Debug)]
pub struct App {
    board: Board,
    status: String,
    restart_visible: bool,
    name_entry_visible: bool,
    names: [String; 2],
    /// Index into `names` being edited.
    field: usize,
    focus: Focus,
    cursor: Position,
    highlight: Option<[Position; 3]>,
}

impl App {
    /// Creates the surface with the name inputs prefilled.
    pub fn new(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            status: String::new(),
            restart_visible: false,
            name_entry_visible: true,
            names: [name1.into(), name2.into()],
            field: 0,
            focus: Focus::Names,
            cursor: Position::Center,
            highlight: None,
        }
    }

    /// Translates a key press into an intent, updating local edit state.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        if is_interrupt(&key) || key.code == KeyCode::Esc {
            return Some(Intent::Quit);
        }

        match self.focus {
            Focus::Names => self.handle_name_key(key.code),
            Focus::Board => self.handle_board_key(key.code),
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
                self.field = 1 - self.field;
            }
            KeyCode::Backspace => {
                self.names[self.field].pop();
            }
            KeyCode::Enter => {
                debug!(name1 = %self.names[0], name2 = %self.names[1], "Play pressed");
                return Some(Intent::Start {
                    name1: self.names[0].clone(),
                    name2: self.names[1].clone(),
                });
            }
            KeyCode::Char(c) => self.names[self.field].push(c),
            _ => {}
        }
        None
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::Char('q') => Some(Intent::Quit),
            KeyCode::Char('r') if self.restart_visible => Some(Intent::Restart),
            KeyCode::Char('n') if self.name_entry_visible => {
                self.focus = Focus::Names;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Play(self.cursor)),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
                None
            }
            other => digit_position(other).map(|pos| {
                self.cursor = pos;
                Intent::Play(pos)
            }),
        }
    }

    /// Marks a completed line for emphasis until the grid changes.
    pub fn highlight(&mut self, line: [Position; 3]) {
        self.highlight = Some(line);
    }

    /// Latest board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the restart hint is shown.
    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    /// Whether the name inputs are shown.
    pub fn name_entry_visible(&self) -> bool {
        self.name_entry_visible
    }

    /// Contents of both name inputs.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Index of the name input being edited.
    pub fn field(&self) -> usize {
        self.field
    }

    /// Where key presses go.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Completed line, if any.
    pub fn highlighted(&self) -> Option<[Position; 3]> {
        self.highlight
    }
}

impl Surface for App {
    fn render_board(&mut self, board: &Board) {
        if &self.board != board {
            self.board = board.clone();
            self.highlight = None;
        }
    }

    fn show_message(&mut self, message: &StatusMessage) {
        self.status = message.to_string();
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
    }

    fn set_name_entry_visible(&mut self, visible: bool) {
        self.name_entry_visible = visible;
        if !visible {
            self.focus = Focus::Board;
        }
    }
}
