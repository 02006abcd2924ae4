//! A single placement and the ways it can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One mark placed on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who is placing the mark.
    pub player: Player,
    /// Where it goes.
    pub position: Position,
}

impl Move {
    /// Mark being placed.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Target cell.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player, self.position)
    }
}

/// Why [`GameState::place`](super::GameState::place) refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Target cell already holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// A line is complete or the board is full.
    #[display("The game is over")]
    GameOver,

    /// The other side is to move.
    #[display("It is not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),
}
