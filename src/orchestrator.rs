//! Game orchestration between players.

use crate::games::tictactoe::{GameState, Mode, Move, Outcome, Player as Mark};
use crate::players::Player;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Events reported while a game runs.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board rendering after a change.
    StateChanged(String),
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// The move itself.
        mv: Move,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(mode: Mode, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            state: GameState::new(mode),
            player_x,
            player_o,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs the game loop until the game is over.
    ///
    /// Each accepted move is reported to `on_event`. A move the game
    /// rejects aborts the loop with that error and leaves the state as
    /// it was before the move.
    #[instrument(skip_all, fields(mode = %self.state.mode()))]
    pub fn run<F>(&mut self, mut on_event: F) -> Result<Outcome>
    where
        F: FnMut(GameEvent),
    {
        info!("Starting game orchestration");
        on_event(GameEvent::StateChanged(self.state.board().display()));

        while !self.state.status().is_over() {
            let mark = *self.state.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = player.get_move(&self.state)?;
            let mv = Move::new(mark, position);

            self.state = self.state.clone().place(mv)?;

            on_event(GameEvent::MoveMade {
                player: player_name,
                mv,
            });
            on_event(GameEvent::StateChanged(self.state.board().display()));
        }

        let outcome = *self.state.status();
        let winner = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%outcome, ?winner, "Game over");
        on_event(GameEvent::GameOver { outcome, winner });

        Ok(outcome)
    }

    /// Restarts the game with the same players.
    pub fn restart(&mut self) {
        self.state = self.state.clone().restart();
    }
}
