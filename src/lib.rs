//! Tictac - tic-tac-toe with a minimax opponent
//!
//! # Architecture
//!
//! - **Games**: board, rules, and an explicit [`GameState`] advanced by
//!   consuming transitions
//! - **AI**: exhaustive minimax ([`best_move`]) and a [`MoveSelector`]
//!   that sometimes plays a random square instead
//! - **Players**: human and computer implementations of [`Player`]
//! - **Orchestrator**: alternates players until the game ends
//!
//! # Example
//!
//! ```
//! use tictac::{select_move, Board, Position, TicTacToePlayer as Mark};
//! use rand::SeedableRng;
//!
//! let board: Board = "XX.OO....".parse()?;
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
//! let mv = select_move(&board, Mark::X, Mark::O, 0.0, &mut rng);
//! assert_eq!(mv, Some(Position::TopRight));
//! # Ok::<(), tictac::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Move selection
pub use ai::{
    best_move, minimax, random_move, score_moves, select_move, Difficulty, MoveSelector, Ply,
    ScoredMove, WIN_SCORE,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, TictacConfig, CONFIG_ENV_VAR};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{AiPlayer, HumanPlayer, LineSource, Player, StdinSource};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    rules, Board, BoardParseError, GameState, Mark, Mode, Move, MoveError, Outcome, Position,
    Square, Player as TicTacToePlayer,
};
