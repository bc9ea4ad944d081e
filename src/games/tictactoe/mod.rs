//! Tic-tac-toe: board, rules, and match flow.

mod controller;
mod error;
mod position;
mod types;

pub mod rules;

pub use controller::{
    DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, MatchController, MatchPhase, TurnOutcome,
};
pub use error::CoordinateError;
pub use position::Position;
pub use types::{Board, Cell, Mark, Player};
