//! Presentation flow shared by every front end.
//!
//! A [`Surface`] draws the board and status line and shows or hides the
//! restart and name-entry controls. [`DisplayController`] turns user intents
//! into [`MatchController`] calls and tells the surface what to show.

use crate::games::tictactoe::{Board, CoordinateError, MatchController, Player, TurnOutcome};
use tracing::{debug, instrument};

/// Status line text shown to the players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StatusMessage {
    /// Before any match has been started.
    #[display("Input name then press Play to start game!")]
    Welcome,
    /// A new match was started with fresh names.
    #[display("{} ({}) First Move!", _0.name(), _0.mark())]
    FirstMove(Player),
    /// The board was cleared for a rematch.
    #[display("{} ({}) start!", _0.name(), _0.mark())]
    Restarted(Player),
    /// The selected cell already holds a mark.
    #[display("The cell has been marked!")]
    CellTaken,
    /// The player completed a line.
    #[display("{} ({}) Win!", _0.name(), _0.mark())]
    Win(Player),
    /// The board filled up with no line.
    #[display("Tie!")]
    Tie,
    /// The player is to move.
    #[display("{} ({}) turn!", _0.name(), _0.mark())]
    Turn(Player),
    /// A move was attempted after the match ended.
    #[display("Game Over! Press restart to replay!")]
    GameOver,
}

impl From<&TurnOutcome> for StatusMessage {
    fn from(outcome: &TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::AlreadyOver => StatusMessage::GameOver,
            TurnOutcome::CellTaken(_) => StatusMessage::CellTaken,
            TurnOutcome::Win { winner, .. } => StatusMessage::Win(winner.clone()),
            TurnOutcome::Tie => StatusMessage::Tie,
            TurnOutcome::Continue { next } => StatusMessage::Turn(next.clone()),
        }
    }
}

/// A front end the match can be shown on.
pub trait Surface {
    /// Redraws the grid.
    fn render_board(&mut self, board: &Board);

    /// Replaces the status line.
    fn show_message(&mut self, message: &StatusMessage);

    /// Shows or hides the restart control.
    fn set_restart_visible(&mut self, visible: bool);

    /// Shows or hides the player name inputs.
    fn set_name_entry_visible(&mut self, visible: bool);
}

/// Routes user intents to the match and keeps a surface in sync.
#[derive(Debug)]
pub struct DisplayController<S> {
    game: MatchController,
    surface: S,
}

impl<S: Surface> DisplayController<S> {
    /// Wraps a surface and greets the players.
    #[instrument(skip_all)]
    pub fn new(surface: S) -> Self {
        Self::with_controller(MatchController::new(), surface)
    }

    /// Wraps an existing match and a surface.
    #[instrument(skip_all)]
    pub fn with_controller(game: MatchController, mut surface: S) -> Self {
        surface.set_restart_visible(false);
        surface.set_name_entry_visible(true);
        surface.show_message(&StatusMessage::Welcome);
        Self { game, surface }
    }

    /// A cell was clicked or selected.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if `(row, col)` is off the board; the
    /// surface is left untouched.
    #[instrument(skip(self))]
    pub fn cell_activated(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<TurnOutcome, CoordinateError> {
        let outcome = self.game.play_turn_at(row, col)?;
        debug!(?outcome, "Turn played");

        self.surface.render_board(self.game.board());
        self.surface.show_message(&StatusMessage::from(&outcome));
        if outcome.is_final() {
            self.surface.set_restart_visible(true);
        }
        Ok(outcome)
    }

    /// The restart control was used.
    #[instrument(skip(self))]
    pub fn restart_requested(&mut self) {
        self.game.restart();
        self.surface.render_board(self.game.board());
        self.surface
            .show_message(&StatusMessage::Restarted(self.game.active_player().clone()));
        self.surface.set_restart_visible(false);
        self.surface.set_name_entry_visible(true);
    }

    /// Play was pressed with the given names.
    #[instrument(skip(self))]
    pub fn start_requested(&mut self, name1: Option<&str>, name2: Option<&str>) {
        self.game.configure_players(name1, name2);
        self.game.restart();
        self.surface.render_board(self.game.board());
        self.surface
            .show_message(&StatusMessage::FirstMove(self.game.players()[0].clone()));
        self.surface.set_restart_visible(false);
        self.surface.set_name_entry_visible(false);
    }

    /// Returns the match being shown.
    pub fn controller(&self) -> &MatchController {
        &self.game
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_message_texts() {
        let alice = Player::new("Alice", Mark::X);
        let bob = Player::new("Bob", Mark::O);
        assert_eq!(
            StatusMessage::Welcome.to_string(),
            "Input name then press Play to start game!"
        );
        assert_eq!(
            StatusMessage::FirstMove(alice.clone()).to_string(),
            "Alice (X) First Move!"
        );
        assert_eq!(StatusMessage::Restarted(alice.clone()).to_string(), "Alice (X) start!");
        assert_eq!(StatusMessage::Win(bob.clone()).to_string(), "Bob (O) Win!");
        assert_eq!(StatusMessage::Turn(bob).to_string(), "Bob (O) turn!");
        assert_eq!(StatusMessage::Tie.to_string(), "Tie!");
        assert_eq!(StatusMessage::CellTaken.to_string(), "The cell has been marked!");
        assert_eq!(
            StatusMessage::GameOver.to_string(),
            "Game Over! Press restart to replay!"
        );
    }

    #[test]
    fn test_message_from_outcome() {
        let bob = Player::new("Bob", Mark::O);
        assert_eq!(
            StatusMessage::from(&TurnOutcome::Continue { next: bob.clone() }),
            StatusMessage::Turn(bob.clone())
        );
        assert_eq!(
            StatusMessage::from(&TurnOutcome::Win {
                winner: bob.clone(),
                line: [Position::TopLeft, Position::Center, Position::BottomRight],
            }),
            StatusMessage::Win(bob)
        );
        assert_eq!(
            StatusMessage::from(&TurnOutcome::CellTaken(Position::Center)),
            StatusMessage::CellTaken
        );
        assert_eq!(
            StatusMessage::from(&TurnOutcome::AlreadyOver),
            StatusMessage::GameOver
        );
    }
}
