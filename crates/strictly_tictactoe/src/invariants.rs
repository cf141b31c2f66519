//! First-class invariants for tic-tac-toe boards.
//!
//! The search is total over any 3x3 board, but only some boards can arise
//! in legal play. These invariants describe which ones, so callers that
//! accept boards from outside can tell the difference.

use crate::rules::has_line;
use crate::types::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first and the sides alternate, so X leads O by zero or one mark.
pub struct AlternatingMarks;

impl Invariant<Board> for AlternatingMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X must have as many marks as O, or exactly one more"
    }
}

/// Play stops at the first completed line, so both sides cannot have one.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "at most one player may have a completed line"
    }
}

/// The winning mark must have been the last one placed.
pub struct NoPlayAfterWin;

impl Invariant<Board> for NoPlayAfterWin {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if has_line(board, Player::X) && x != o + 1 {
            return false;
        }
        if has_line(board, Player::O) && x != o {
            return false;
        }
        true
    }

    fn description() -> &'static str {
        "no mark may be placed after a line is completed"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (AlternatingMarks, SingleWinner, NoPlayAfterWin);

/// Checks that a board can arise from the empty board in legal play.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn check_reachable(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board).inspect_err(|violations| {
        for violation in violations {
            warn!(%violation, "Board is not reachable in legal play");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::result;
    use crate::search::minimax;
    use crate::rules::terminal;
    use crate::types::initial_state;

    #[test]
    fn test_empty_board_is_reachable() {
        assert!(check_reachable(&initial_state()).is_ok());
    }

    #[test]
    fn test_holds_along_self_play() {
        let mut board = initial_state();
        while !terminal(&board) {
            let mv = minimax(&board).expect("non-terminal board has a move");
            board = result(&board, mv).unwrap();
            assert!(check_reachable(&board).is_ok(), "{board}");
        }
    }

    #[test]
    fn test_o_ahead_of_x() {
        let board: Board = "O........".parse().unwrap();
        let violations = check_reachable(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AlternatingMarks::description());
    }

    #[test]
    fn test_two_winners() {
        let board: Board = "XXX/.../OOO".parse().unwrap();
        let violations = check_reachable(&board).unwrap_err();
        assert!(violations.contains(&InvariantViolation::new(SingleWinner::description())));
    }

    #[test]
    fn test_move_after_win() {
        // X completed the top row, then O played anyway.
        let board: Board = "XXX/OO./O..".parse().unwrap();
        let violations = check_reachable(&board).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(NoPlayAfterWin::description())]
        );
    }
}
