//! Move selection with deliberate mistakes.

use super::difficulty::Difficulty;
use super::minimax::best_move;
use crate::games::tictactoe::{Board, Player, Position};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks a move for `maximizing` on `board`.
///
/// One uniform roll in `[0, 1)` is drawn from `rng` per call. When
/// `mistake_probability` exceeds the roll, a uniformly random empty
/// square is returned; otherwise the minimax-optimal move. Returns
/// `None` when the board has no empty square. The board is never
/// modified.
#[instrument(level = "debug", skip(board, rng))]
pub fn select_move<R: Rng>(
    board: &Board,
    maximizing: Player,
    minimizing: Player,
    mistake_probability: f64,
    rng: &mut R,
) -> Option<Position> {
    debug_assert_ne!(maximizing, minimizing, "sides must use distinct marks");

    let open = board.empty_positions();
    if open.is_empty() {
        debug!("No move available");
        return None;
    }

    let roll: f64 = rng.random();
    if mistake_probability > roll {
        let position = open.choose(rng).copied();
        debug!(roll, ?position, "Playing a random move");
        return position;
    }

    best_move(board, maximizing, minimizing)
}

/// Uniformly random empty square, or `None` on a full board.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// A computer opponent bound to one mark and its own random source.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = SmallRng> {
    mark: Player,
    mistake_probability: f64,
    rng: R,
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector playing `mark` against its opponent.
    pub fn new(mark: Player, mistake_probability: f64, rng: R) -> Self {
        Self {
            mark,
            mistake_probability,
            rng,
        }
    }

    /// Creates a selector whose mistake rate comes from a difficulty level.
    pub fn with_difficulty(mark: Player, difficulty: Difficulty, rng: R) -> Self {
        Self::new(mark, difficulty.mistake_probability(), rng)
    }

    /// Chooses the next move on `board`.
    pub fn select(&mut self, board: &Board) -> Option<Position> {
        select_move(
            board,
            self.mark,
            self.mark.opponent(),
            self.mistake_probability,
            &mut self.rng,
        )
    }

    /// The mark this selector plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Chance per call of ignoring the search.
    pub fn mistake_probability(&self) -> f64 {
        self.mistake_probability
    }
}

impl MoveSelector<SmallRng> {
    /// Creates a selector with a reproducible random source.
    pub fn with_seed(mark: Player, mistake_probability: f64, seed: u64) -> Self {
        Self::new(mark, mistake_probability, SmallRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the operating system.
    pub fn from_os_rng(mark: Player, mistake_probability: f64) -> Self {
        Self::new(mark, mistake_probability, SmallRng::from_os_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_probability_plays_the_search() {
        let board: Board = "XX.OO....".parse().unwrap();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_eq!(
                select_move(&board, Player::X, Player::O, 0.0, &mut rng),
                Some(Position::TopRight)
            );
        }
    }

    #[test]
    fn test_selector_tracks_its_mark() {
        let mut selector = MoveSelector::with_seed(Player::O, 0.0, 7);
        assert_eq!(selector.mark(), Player::O);
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(selector.select(&board), Some(Position::TopCenter));
    }

    #[test]
    fn test_random_move_on_full_board() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(random_move(&board, &mut rng), None);
    }
}
