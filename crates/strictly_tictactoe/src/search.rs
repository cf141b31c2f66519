//! Exhaustive minimax search.
//!
//! The tree is small enough (549,945 positions below the empty board) to
//! enumerate completely, so there is no pruning, no
//! transposition table and no depth limit.
//!
//! Recursion walks a single scratch board per branch: each level applies
//! its move through a [`ScopedMove`], recurses, and the guard clears the
//! cell again on the way out.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&initial_state());
//! assert_eq!(result.value, Some(0));
//! ```

use crate::action::Move;
use crate::moves::{actions, ScopedMove};
use crate::rules::{terminal, utility};
use crate::types::{player, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// A root move with the value of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub mv: Move,
    /// Minimax value of the board after the move, from X's point of view.
    pub value: i8,
}

/// Search result containing the best move and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the side to move, `None` on a terminal board.
    pub best_move: Option<Move>,
    /// Value of the best move, `None` on a terminal board.
    pub value: Option<i8>,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Runs minimax searches and counts the positions they visit.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
    #[cfg(feature = "parallel")]
    parallel: bool,
}

impl Searcher {
    /// Creates a sequential searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates root moves on the rayon pool when `enabled`.
    ///
    /// Each root branch works on its own copy of the board. Values are
    /// still compared in enumeration order, so the chosen move is the same
    /// as a sequential search.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Total positions visited by this searcher so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Finds the optimal move for the side to move.
    ///
    /// Ties keep the first move in row-major order.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let start = self.nodes;
        let scored = self.evaluate_moves(board);
        let best = best_move(player(board), &scored);
        let nodes = self.nodes - start;

        debug!(
            best_move = ?best.map(|s| s.mv),
            value = ?best.map(|s| s.value),
            nodes,
            "Search complete"
        );

        SearchResult {
            best_move: best.map(|s| s.mv),
            value: best.map(|s| s.value),
            nodes,
        }
    }

    /// Scores every legal move, in the order [`actions`] returns them.
    ///
    /// Returns an empty list on a terminal board.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        if terminal(board) {
            return Vec::new();
        }

        let to_move = player(board);
        let moves = actions(board);

        #[cfg(feature = "parallel")]
        if self.parallel {
            return self.evaluate_parallel(board, to_move, &moves);
        }

        let mut scratch = *board;
        moves
            .into_iter()
            .map(|mv| {
                let value = self.reply_value(&mut scratch, mv, to_move);
                trace!(%mv, value, "Root move scored");
                ScoredMove { mv, value }
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(
        &mut self,
        board: &Board,
        to_move: Player,
        moves: &[Move],
    ) -> Vec<ScoredMove> {
        use rayon::prelude::*;

        let branches: Vec<(ScoredMove, u64)> = moves
            .par_iter()
            .map(|&mv| {
                let mut branch = Searcher::new();
                let mut scratch = *board;
                let value = branch.reply_value(&mut scratch, mv, to_move);
                trace!(%mv, value, "Root move scored");
                (ScoredMove { mv, value }, branch.nodes)
            })
            .collect();

        self.nodes += branches.iter().map(|(_, nodes)| nodes).sum::<u64>();
        branches.into_iter().map(|(scored, _)| scored).collect()
    }

    /// Minimax value of `board` itself, from X's point of view.
    pub fn value(&mut self, board: &Board) -> i8 {
        let mut scratch = *board;
        match player(board) {
            Player::X => self.max_value(&mut scratch),
            Player::O => self.min_value(&mut scratch),
        }
    }

    /// Value of playing `mv` at the root: the opponent replies next.
    fn reply_value(&mut self, scratch: &mut Board, mv: Move, to_move: Player) -> i8 {
        let mut child = ScopedMove::apply_legal(scratch, mv);
        match to_move {
            Player::X => self.min_value(&mut child),
            Player::O => self.max_value(&mut child),
        }
    }

    fn max_value(&mut self, board: &mut Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mut best = i8::MIN;
        for mv in actions(board) {
            let mut child = ScopedMove::apply_legal(board, mv);
            best = best.max(self.min_value(&mut child));
        }
        best
    }

    fn min_value(&mut self, board: &mut Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mut best = i8::MAX;
        for mv in actions(board) {
            let mut child = ScopedMove::apply_legal(board, mv);
            best = best.min(self.max_value(&mut child));
        }
        best
    }
}

/// Picks X's strictly greatest or O's strictly smallest value from
/// moves scored by [`Searcher::evaluate_moves`].
///
/// A later move only replaces the current best if it is strictly better,
/// so the first move reaching the optimum wins.
pub fn best_move(to_move: Player, scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &candidate in scored {
        let better = match (best, to_move) {
            (None, _) => true,
            (Some(current), Player::X) => candidate.value > current.value,
            (Some(current), Player::O) => candidate.value < current.value,
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

/// Returns the optimal move for the side to move, or `None` if the game is
/// over.
pub fn minimax(board: &Board) -> Option<Move> {
    Searcher::new().search(board).best_move
}

/// Returns the game-theoretic value of a board under optimal play by both
/// sides: +1 X wins, -1 O wins, 0 draw.
pub fn value(board: &Board) -> i8 {
    Searcher::new().value(board)
}
