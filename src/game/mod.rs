//! Core Connect Four game logic: board representation, player identity, and
//! the move-application state machine.

mod board;
mod player;
mod state;

pub use board::Board;
pub use player::PlayerId;
pub use state::{Game, MoveOutcome};
