//! Line detection.

use super::super::Position::{self, *};
use super::super::{Board, Player, Square};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [TopLeft, TopCenter, TopRight],
    [MiddleLeft, Center, MiddleRight],
    [BottomLeft, BottomCenter, BottomRight],
    [TopLeft, MiddleLeft, BottomLeft],
    [TopCenter, Center, BottomCenter],
    [TopRight, MiddleRight, BottomRight],
    [TopLeft, Center, BottomRight],
    [TopRight, Center, BottomLeft],
];

/// Owner of the first complete line in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// Whether `player` owns any complete line.
///
/// Scans every line, so a board where both marks have a line (never
/// reachable in play) still answers for each of them.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(player))
}

fn line_owner(board: &Board, [a, b, c]: &[Position; 3]) -> Option<Player> {
    match (board.get(*a), board.get(*b), board.get(*c)) {
        (Square::Occupied(p), Square::Occupied(q), Square::Occupied(r)) if p == q && q == r => {
            Some(p)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_each_line_is_detected() {
        for line in LINES {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Square::Occupied(Player::O));
            }
            assert_eq!(check_winner(&b), Some(Player::O), "{:?}", line);
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(check_winner(&board("XX.OO....")), None);
        assert!(!has_line(&board("XX.OO...."), Player::X));
    }

    #[test]
    fn test_has_line_sees_both_players() {
        let b = board("XXXOOO...");
        assert!(has_line(&b, Player::X));
        assert!(has_line(&b, Player::O));
        assert_eq!(check_winner(&b), Some(Player::X));
    }
}
