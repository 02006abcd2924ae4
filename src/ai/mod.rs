//! Computer opponent for tic-tac-toe.
//!
//! [`best_move`] runs the exhaustive search; [`select_move`] wraps it
//! with a per-call chance of playing a random square instead.

mod difficulty;
mod minimax;
mod selector;

pub use difficulty::Difficulty;
pub use minimax::{best_move, minimax, score_moves, Ply, ScoredMove, WIN_SCORE};
pub use selector::{random_move, select_move, MoveSelector};
