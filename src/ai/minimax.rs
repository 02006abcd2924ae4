//! Exhaustive minimax over a tic-tac-toe board.
//!
//! Scores are from the maximizing side's point of view: a completed
//! line is worth [`WIN_SCORE`] to its owner, a full board without a
//! line is worth 0. Depth does not bias the score, so a win in five
//! plies is as good as a win in one. Children are visited in ascending
//! index order and the first strictly better move is kept, which makes
//! the lowest-index move win every tie.

use crate::games::tictactoe::{rules, Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score for a completed line.
pub const WIN_SCORE: i32 = 10;

/// Whose turn it is inside the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    /// The maximizing side places its mark and takes the highest child.
    Max,
    /// The minimizing side places its mark and takes the lowest child.
    Min,
}

impl Ply {
    fn next(self) -> Self {
        match self {
            Ply::Max => Ply::Min,
            Ply::Min => Ply::Max,
        }
    }
}

/// Minimax value of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the maximizing side would take.
    pub position: Position,
    /// Value of the board after that move, under optimal play by both sides.
    pub score: i32,
}

/// Scores a terminal board, or returns `None` if play can continue.
fn evaluate(board: &Board, maximizing: Player, minimizing: Player) -> Option<i32> {
    if rules::has_line(board, maximizing) {
        Some(WIN_SCORE)
    } else if rules::has_line(board, minimizing) {
        Some(-WIN_SCORE)
    } else if rules::is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// Minimax value of `board` with `ply` to move.
///
/// Recursion always reaches a terminal board, so the value is one of
/// `-WIN_SCORE`, `0`, `WIN_SCORE`.
pub fn minimax(board: &Board, maximizing: Player, minimizing: Player, ply: Ply) -> i32 {
    if let Some(score) = evaluate(board, maximizing, minimizing) {
        return score;
    }

    let mover = match ply {
        Ply::Max => maximizing,
        Ply::Min => minimizing,
    };
    let children = Position::valid_moves(board).into_iter().map(|pos| {
        minimax(
            &board.with_mark(pos, mover),
            maximizing,
            minimizing,
            ply.next(),
        )
    });

    // A non-terminal board always has an empty square.
    match ply {
        Ply::Max => children.max(),
        Ply::Min => children.min(),
    }
    .unwrap_or(0)
}

/// Scores every legal move for `maximizing`, in ascending index order.
#[instrument(level = "debug", skip(board))]
pub fn score_moves(board: &Board, maximizing: Player, minimizing: Player) -> Vec<ScoredMove> {
    Position::valid_moves(board)
        .into_iter()
        .map(|position| ScoredMove {
            position,
            score: minimax(
                &board.with_mark(position, maximizing),
                maximizing,
                minimizing,
                Ply::Min,
            ),
        })
        .collect()
}

/// Optimal move for `maximizing`, or `None` on a full board.
///
/// Among equally scored moves the lowest index is returned.
#[instrument(level = "debug", skip(board))]
pub fn best_move(board: &Board, maximizing: Player, minimizing: Player) -> Option<Position> {
    let mut best: Option<ScoredMove> = None;
    for candidate in score_moves(board, maximizing, minimizing) {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    if let Some(chosen) = best {
        debug!(position = %chosen.position, score = chosen.score, "Best move");
    }
    best.map(|chosen| chosen.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(
            minimax(&board("OOOXX.X.."), Player::O, Player::X, Ply::Max),
            WIN_SCORE
        );
        assert_eq!(
            minimax(&board("OOOXX.X.."), Player::X, Player::O, Ply::Max),
            -WIN_SCORE
        );
        assert_eq!(
            minimax(&board("XOXOXXOXO"), Player::O, Player::X, Ply::Min),
            0
        );
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax(&Board::new(), Player::X, Player::O, Ply::Max), 0);
    }

    #[test]
    fn test_forced_loss_is_seen_ahead() {
        // X . . / . O . / . . X with O to move: every O reply except an
        // edge loses to a fork, so O can still hold the draw.
        let scores = score_moves(&board("X...O...X"), Player::O, Player::X);
        let corner = scores
            .iter()
            .find(|m| m.position == Position::TopRight)
            .unwrap();
        let edge = scores
            .iter()
            .find(|m| m.position == Position::TopCenter)
            .unwrap();
        assert_eq!(corner.score, -WIN_SCORE);
        assert_eq!(edge.score, 0);
        assert_eq!(
            best_move(&board("X...O...X"), Player::O, Player::X),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_score_moves_lists_only_empty_cells() {
        let scores = score_moves(&board("XO.XO...."), Player::X, Player::O);
        let positions: Vec<_> = scores.iter().map(|m| m.position.to_index()).collect();
        assert_eq!(positions, vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        assert_eq!(best_move(&board("XOXOXXOXO"), Player::X, Player::O), None);
    }
}
