//! Marks, squares, boards and outcomes.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides, named by the mark it places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Moves first.
    X,
    /// Moves second; the computer's side in single-player games.
    O,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Player),
}

/// Nine cells in row-major order.
///
/// The board is a plain `Copy` value. The search explores children by
/// copying it and never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Board with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board directly from its squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Contents of `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites `pos`.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Whether `pos` has no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// All nine cells.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Three text rows separated by `-+-+-` rules.
    ///
    /// Empty cells show the 1-based number a player types to claim them.
    pub fn display(&self) -> String {
        let cells: Vec<String> = self
            .squares
            .iter()
            .enumerate()
            .map(|(index, square)| match square {
                Square::Empty => (index + 1).to_string(),
                Square::Occupied(player) => player.to_string(),
            })
            .collect();

        cells
            .chunks(3)
            .map(|row| row.join("|"))
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_`, `-` and the digits
    /// `1`-`9` are empty. Whitespace and `|` separators are ignored, so
    /// the output of [`Board::display`] round-trips once the `-+-+-`
    /// rules are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' | '1'..='9' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// Where a board stands, derived from the cells alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Cells remain and nobody has a line.
    #[display("In progress")]
    InProgress,
    /// The side owns a complete line.
    #[display("Player {} wins", _0)]
    Won(Player),
    /// Full board with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// The side that completed a line.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_display_output() {
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::BottomRight, Player::O);

        let text: String = board
            .display()
            .lines()
            .filter(|line| !line.starts_with('-'))
            .collect();
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
    }
}
