//! Computer player backed by the move selector.

use super::Player;
use crate::ai::MoveSelector;
use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Computer player.
pub struct AiPlayer<R: Rng> {
    name: String,
    selector: MoveSelector<R>,
    think: Duration,
}

impl<R: Rng> AiPlayer<R> {
    /// Creates a computer player that moves immediately.
    pub fn new(name: impl Into<String>, selector: MoveSelector<R>) -> Self {
        Self {
            name: name.into(),
            selector,
            think: Duration::ZERO,
        }
    }

    /// Pauses for `think` before each move.
    pub fn with_think_time(mut self, think: Duration) -> Self {
        self.think = think;
        self
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn get_move(&mut self, state: &GameState) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");

        if !self.think.is_zero() {
            std::thread::sleep(self.think);
        }

        let position = self
            .selector
            .select(state.board())
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(ai = %self.name, %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
