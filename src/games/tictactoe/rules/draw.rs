//! Full-board detection.

use super::super::{Board, Square};
use super::win::check_winner;

/// No empty squares remain.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}

/// Full with nobody owning a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullness() {
        assert!(!is_full(&Board::new()));
        assert!(!is_full(&"XOXOXOXO.".parse().unwrap()));
        assert!(is_full(&"XOXOXXOXO".parse().unwrap()));
    }

    #[test]
    fn test_draw_needs_no_line() {
        // X O X / O X X / O X O
        assert!(is_draw(&"XOXOXXOXO".parse().unwrap()));
        // X O X / O X O / X X O, X owns the anti-diagonal
        assert!(!is_draw(&"XOXOXOXXO".parse().unwrap()));
        assert!(!is_draw(&"XXXOO....".parse().unwrap()));
    }
}
