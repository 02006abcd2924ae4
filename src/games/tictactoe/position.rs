//! The nine cells of the board.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the board, numbered 0-8 in row-major order.
///
/// Moves name cells through this type, so an out-of-range index never
/// reaches the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(usize)]
pub enum Position {
    /// Cell 0.
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Cell 1.
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Cell 2.
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Cell 3.
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Cell 4.
    #[strum(to_string = "Center")]
    Center,
    /// Cell 5.
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Cell 6.
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Cell 7.
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Cell 8.
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// Every cell in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable name, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Cell at a board index, if the index is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Parses what a person types: a 1-based cell number or a label.
    ///
    /// Numbers match what [`Board::display`] prints in empty squares.
    /// Labels ignore case and accept a space for the hyphen, so
    /// "top left" works.
    pub fn from_label_or_number(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.replace(' ', "-");
        Self::iter().find(|pos| pos.label().eq_ignore_ascii_case(&wanted))
    }

    /// Empty cells of `board` in ascending index order.
    pub fn valid_moves(board: &Board) -> Vec<Self> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
            assert_eq!(Position::ALL[index], pos);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::TopLeft.label(), "Top-left");
        assert_eq!(Position::BottomCenter.to_string(), "Bottom-center");
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("Bottom left"),
            Some(Position::BottomLeft)
        );
        assert_eq!(Position::from_label_or_number("middle"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }
}
