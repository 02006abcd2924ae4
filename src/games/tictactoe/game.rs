//! Game state as an explicit value.
//!
//! Every transition consumes a [`GameState`] and returns the next one,
//! so the caller always holds exactly one authoritative state and the
//! move search only ever sees board snapshots.

use super::action::{Move, MoveError};
use super::rules;
use super::{Board, Outcome, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who controls the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Human plays X, the computer plays O.
    #[default]
    #[strum(to_string = "single", serialize = "singleplayer")]
    #[serde(alias = "singleplayer")]
    Single,
    /// Two humans alternate at the same board.
    #[strum(to_string = "two", serialize = "twoplayer")]
    #[serde(alias = "twoplayer")]
    Two,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move. Frozen at the last mover once the game is over.
    to_move: Player,
    /// Game status.
    status: Outcome,
    /// Moves played so far.
    history: Vec<Move>,
    /// Single- or two-player.
    mode: Mode,
}

impl GameState {
    /// Mark the computer plays in single-player mode.
    pub const AI_MARK: Player = Player::O;

    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: Outcome::InProgress,
            history: Vec::new(),
            mode,
        }
    }

    /// Applies a move, consuming this state and returning the next one.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished.
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn.
    /// - [`MoveError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(mv = %action))]
    pub fn place(mut self, action: Move) -> Result<Self, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        self.status = rules::outcome(&self.board);

        if self.status.is_over() {
            debug!(status = %self.status, "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self)
    }

    /// Places the current player's mark at `position`.
    pub fn play(self, position: Position) -> Result<Self, MoveError> {
        let action = Move::new(self.to_move, position);
        self.place(action)
    }

    /// Starts over with an empty board in the same mode.
    #[instrument(skip(self))]
    pub fn restart(self) -> Self {
        Self::new(self.mode)
    }

    /// Replays moves from a fresh game.
    #[instrument]
    pub fn replay(mode: Mode, moves: &[Move]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(mode), |state, action| state.place(*action))
    }

    /// Returns true when the computer should move next.
    pub fn ai_to_move(&self) -> bool {
        self.mode == Mode::Single && self.to_move == Self::AI_MARK && !self.status.is_over()
    }

    /// Positions still open, in ascending index order.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Status line shown under the board.
    pub fn status_text(&self) -> String {
        match self.status {
            Outcome::InProgress => format!("Player {}'s turn", self.to_move),
            Outcome::Won(player) => format!("Player {} wins!", player),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("single".parse::<Mode>(), Ok(Mode::Single));
        assert_eq!("two".parse::<Mode>(), Ok(Mode::Two));
        assert_eq!("twoplayer".parse::<Mode>(), Ok(Mode::Two));
        assert!("three".parse::<Mode>().is_err());
    }

    #[test]
    fn test_status_text_follows_turns() {
        let state = GameState::new(Mode::Two);
        assert_eq!(state.status_text(), "Player X's turn");

        let state = state.play(Position::Center).unwrap();
        assert_eq!(state.status_text(), "Player O's turn");
    }

    #[test]
    fn test_ai_to_move_only_in_single_mode() {
        let single = GameState::new(Mode::Single)
            .play(Position::Center)
            .unwrap();
        assert!(single.ai_to_move());

        let two = GameState::new(Mode::Two).play(Position::Center).unwrap();
        assert!(!two.ai_to_move());
    }

    #[test]
    fn test_finished_game_has_no_valid_moves() {
        let moves = [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ];
        let state = moves
            .into_iter()
            .try_fold(GameState::new(Mode::Two), GameState::play)
            .unwrap();

        assert_eq!(*state.status(), Outcome::Won(Player::X));
        assert_eq!(*state.to_move(), Player::X);
        assert!(state.valid_moves().is_empty());
        assert_eq!(state.status_text(), "Player X wins!");
    }
}
