//! Tic-tac-toe: board, rules, and the game state the players drive.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameState, Mode};
pub use position::Position;
pub use types::{Board, BoardParseError, Outcome, Player, Square};

/// Alias used where the player is thought of as the symbol on the board.
pub type Mark = Player;
