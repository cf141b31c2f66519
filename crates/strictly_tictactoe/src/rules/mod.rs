//! Terminal detection and scoring for tic-tac-toe.
//!
//! Everything here is a pure function of the board: nothing about the
//! outcome is stored alongside the cells.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, winner, LINES};

use crate::types::{Board, Outcome, Player};

/// Returns true if someone has completed a line or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board: +1 if X won, -1 if O won, 0 for a draw.
///
/// Only meaningful for terminal boards; debug builds assert that.
pub fn utility(board: &Board) -> i8 {
    debug_assert!(terminal(board), "utility of a board still in play");
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Derives the outcome of a board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
