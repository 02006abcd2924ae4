//! Tests for tic-tac-toe positions and board parsing.

use tictac::{Board, BoardParseError, Position, Square, TicTacToePlayer as Player};

#[test]
fn test_indices_are_row_major() {
    let corners = [0, 2, 6, 8].map(|i| Position::from_index(i).unwrap());
    assert_eq!(
        corners,
        [
            Position::TopLeft,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight
        ]
    );
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_every_cell_open_at_start() {
    assert_eq!(Position::valid_moves(&Board::new()), Position::ALL);
}

#[test]
fn test_open_cells_skip_marks_and_stay_sorted() {
    let board: Board = "X...O....".parse().unwrap();
    let open = Position::valid_moves(&board);

    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(open, board.empty_positions());
}

#[test]
fn test_board_parse_accepts_separators() {
    let board: Board = "x|o|. / . x . / o . .".replace('/', "").parse().unwrap();
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 2);
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_board_parse_rejects_bad_input() {
    assert_eq!(
        "XXXXXXXXXX".parse::<Board>(),
        Err(BoardParseError::WrongLength(10))
    );
    assert!(matches!(
        "XO?......".parse::<Board>(),
        Err(BoardParseError::InvalidCell('?'))
    ));
}

#[test]
fn test_board_display() {
    let board: Board = "X...O....".parse().unwrap();
    assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}
