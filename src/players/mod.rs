//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, LineSource, StdinSource};

use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;

/// Anything that can choose a move for the side to play.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Called only while the game is in progress and it is this player's
    /// turn. The returned position should be empty; the orchestrator
    /// rejects it otherwise.
    fn get_move(&mut self, state: &GameState) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
