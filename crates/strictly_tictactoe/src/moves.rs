//! Move enumeration and the transition function.

use crate::action::{Move, MoveError};
use crate::types::{player, Board, Cell};
use std::ops::{Deref, DerefMut};
use tracing::instrument;

/// Returns every empty cell in row-major order.
///
/// A full board has no actions.
pub fn actions(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}

/// Returns the board that results from the side to move playing `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the target cell is occupied.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn result(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if !board.is_empty(mv) {
        return Err(MoveError::InvalidMove(mv));
    }

    let mut next = *board;
    next.set(mv, Cell::Occupied(player(board)));
    Ok(next)
}

/// A move applied in place to a borrowed board, undone when dropped.
///
/// The board derefs to the position after the move for as long as the
/// guard lives. Dropping the guard (including during unwinding) empties
/// the cell again, so the borrowed board always returns to its prior
/// state.
#[derive(Debug)]
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> ScopedMove<'a> {
    /// Applies `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the target cell is occupied.
    pub fn new(board: &'a mut Board, mv: Move) -> Result<Self, MoveError> {
        if !board.is_empty(mv) {
            return Err(MoveError::InvalidMove(mv));
        }
        Ok(Self::apply_legal(board, mv))
    }

    /// Applies a move taken from [`actions`] on this same board.
    pub(crate) fn apply_legal(board: &'a mut Board, mv: Move) -> Self {
        debug_assert!(board.is_empty(mv), "scoped move onto occupied cell {mv}");
        let mark = player(board);
        board.set(mv, Cell::Occupied(mark));
        Self { board, mv }
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, Cell::Empty);
    }
}
