//! Moves and the errors raised when applying them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move in tic-tac-toe: the zero-based `(row, col)` of the cell to mark.
///
/// The player making the move is never part of the move itself; it is
/// derived from the board the move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a move.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below 3.
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 3 && col < 3, "move coordinates must be below 3");
        Self { row, col }
    }

    /// Creates a move, returning `None` if a coordinate is off the board.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Returns the row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Failed to parse a [`Move`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseMoveError {
    /// The text is not of the form `row,col`.
    #[display("expected `row,col`, got {:?}", _0)]
    InvalidFormat(String),

    /// A coordinate is not below 3.
    #[display("({}, {}) is off the board", _0, _1)]
    OutOfBounds(usize, usize),
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `row,col`, e.g. `0,2`. Parentheses and spaces are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoveError::InvalidFormat(s.to_string());

        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed.split_once(',').ok_or_else(invalid)?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;

        Self::try_new(row, col).ok_or(ParseMoveError::OutOfBounds(row, col))
    }
}

/// Error raised when applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("invalid move {}: cell is already occupied", _0)]
    InvalidMove(Move),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Move::try_new(2, 2), Some(Move::new(2, 2)));
        assert_eq!(Move::try_new(3, 0), None);
        assert_eq!(Move::try_new(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn test_new_panics_off_board() {
        let _ = Move::new(1, 3);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("0,2".parse::<Move>(), Ok(Move::new(0, 2)));
        assert_eq!(" (1, 1) ".parse::<Move>(), Ok(Move::new(1, 1)));
        assert_eq!(
            "3,1".parse::<Move>(),
            Err(ParseMoveError::OutOfBounds(3, 1))
        );
        assert!(matches!(
            "middle".parse::<Move>(),
            Err(ParseMoveError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(2, 0).to_string(), "(2, 0)");
        assert_eq!(
            MoveError::InvalidMove(Move::new(0, 0)).to_string(),
            "invalid move (0, 0): cell is already occupied"
        );
    }
}
