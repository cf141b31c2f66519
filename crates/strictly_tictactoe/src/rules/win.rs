//! Line completion for tic-tac-toe.

use crate::action::Move;
use crate::types::{Board, Cell, Player};

/// The eight lines of the board, in scan order: rows, columns, diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the mark holding the first complete line, if any.
///
/// Lines are scanned rows first, then columns, then diagonals.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Checks whether `player` holds any complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|&line| line_owner(board, line) == Some(player))
}

fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let cell = board.get(a);
    match cell {
        Cell::Occupied(player) if cell == board.get(b) && cell == board.get(c) => Some(player),
        _ => None,
    }
}
