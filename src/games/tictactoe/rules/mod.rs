//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game loop and the move search share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise
/// the game is still in progress.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
