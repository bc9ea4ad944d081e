//! Match flow: players, turn order, and the win/tie state machine.

use super::error::CoordinateError;
use super::position::Position;
use super::types::{Board, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Name used for the first player when none is supplied.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Name used for the second player when none is supplied.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Whether the match accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the active player to move.
    AwaitingMove,
    /// Won or tied; only a restart or new configuration leaves this phase.
    Over,
}

/// Result of [`MatchController::play_turn`].
///
/// Exactly one variant describes every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The match had already ended; nothing changed.
    AlreadyOver,
    /// The target cell was already marked; nothing changed.
    CellTaken(Position),
    /// The move completed a line.
    Win {
        /// Player who completed the line.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The move filled the board without completing a line.
    Tie,
    /// The match goes on.
    Continue {
        /// Player to move next.
        next: Player,
    },
}

impl TurnOutcome {
    /// Returns true if this outcome ended the match.
    pub fn is_final(&self) -> bool {
        matches!(self, TurnOutcome::Win { .. } | TurnOutcome::Tie)
    }
}

/// Owns the board and both players and drives turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchController {
    board: Board,
    players: [Player; 2],
    /// Index into `players`.
    active: usize,
    over: bool,
}

impl MatchController {
    /// Creates a match between "Player 1" (X) and "Player 2" (O).
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME)
    }

    /// Creates a match with the given names; X goes to the first.
    #[instrument(skip_all)]
    pub fn with_players(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(name1, Mark::X), Player::new(name2, Mark::O)],
            active: 0,
            over: false,
        }
    }

    /// Replaces both players and makes the first one active.
    ///
    /// Missing or empty names fall back to the defaults. Clears the
    /// game-over flag but leaves the board as it is; call
    /// [`restart`](Self::restart) for a clean board.
    #[instrument(skip(self))]
    pub fn configure_players(&mut self, name1: Option<&str>, name2: Option<&str>) {
        let name1 = name_or_default(name1, DEFAULT_FIRST_NAME);
        let name2 = name_or_default(name2, DEFAULT_SECOND_NAME);
        info!(player_x = %name1, player_o = %name2, "Players configured");

        self.players = [Player::new(name1, Mark::X), Player::new(name2, Mark::O)];
        self.active = 0;
        self.over = false;
    }

    /// Clears the board and hands the first move back to the first player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting match");
        self.board.reset();
        self.active = 0;
        self.over = false;
    }

    /// Plays the active player's mark at `pos`.
    ///
    /// A win is checked before a tie, so filling the last cell with a
    /// completed line is reported as a win.
    #[instrument(skip(self), fields(player = %self.players[self.active]))]
    pub fn play_turn(&mut self, pos: Position) -> TurnOutcome {
        if self.over {
            debug!("Move ignored, match is over");
            return TurnOutcome::AlreadyOver;
        }

        if !self.board.is_empty(pos) {
            debug!("Move ignored, cell is taken");
            return TurnOutcome::CellTaken(pos);
        }

        let mark = *self.players[self.active].mark();
        self.board.place_mark(pos, mark);
        debug!(board = %self.board, "Mark placed");

        // A board kept across `configure_players` may already hold a line.
        if let Some((mark, line)) = self.board.winner() {
            self.over = true;
            let winner = self.player_for(mark).clone();
            info!(%winner, "Match won");
            return TurnOutcome::Win { winner, line };
        }

        if self.board.is_full() {
            self.over = true;
            info!("Match tied");
            return TurnOutcome::Tie;
        }

        self.active = 1 - self.active;
        TurnOutcome::Continue {
            next: self.players[self.active].clone(),
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] without touching any state if either
    /// coordinate is outside 0-2.
    pub fn play_turn_at(&mut self, row: usize, col: usize) -> Result<TurnOutcome, CoordinateError> {
        let pos = Position::from_row_col(row, col)?;
        Ok(self.play_turn(pos))
    }

    /// Returns the player entitled to the next move.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns the player who plays `mark`.
    pub fn player_for(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Returns both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns true once the match has been won or tied.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Current phase of the match.
    pub fn phase(&self) -> MatchPhase {
        if self.over {
            MatchPhase::Over
        } else {
            MatchPhase::AwaitingMove
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}

fn name_or_default(name: Option<&str>, default: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}
