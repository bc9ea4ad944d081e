//! Two-player tic-tac-toe match engine.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of cells, each holding at most one mark
//! - **Rules**: win detection over the 8 lines, full-board detection
//! - **MatchController**: players, turn order, win/tie state machine
//! - **DisplayController**: drives any [`Surface`] from user intents
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{MatchController, TurnOutcome};
//!
//! # fn example() -> Result<(), tictactoe_match::CoordinateError> {
//! let mut game = MatchController::with_players("Alice", "Bob");
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play_turn_at(row, col)?;
//! }
//! let outcome = game.play_turn_at(0, 2)?;
//! assert!(matches!(outcome, TurnOutcome::Win { ref winner, .. } if winner.name() == "Alice"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod display;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Presentation flow
pub use display::{DisplayController, StatusMessage, Surface};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, CoordinateError, DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, Mark, MatchController,
    MatchPhase, Player, Position, TurnOutcome, rules,
};
