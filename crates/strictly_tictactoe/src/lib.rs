//! Pure tic-tac-toe game logic with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`], derived turn order
//! - **Moves**: [`actions`] enumerates, [`result`] transitions
//! - **Rules**: [`winner`], [`terminal`], [`utility`], [`outcome`]
//! - **Search**: [`minimax`] and the [`Searcher`] behind it
//!
//! Whose turn it is, who won and whether the game is over are never stored;
//! they are derived from the cells every time.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let mv = minimax(&board).expect("game in progress has a move");
//!     board = result(&board, mv)?;
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod moves;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError, ParseMoveError};
pub use invariants::{check_reachable, InvariantViolation};
pub use moves::{actions, result, ScopedMove};
pub use rules::{is_full, outcome, terminal, utility, winner};
pub use search::{best_move, minimax, value, ScoredMove, SearchResult, Searcher};
pub use types::{initial_state, player, Board, Cell, Outcome, ParseBoardError, Player};
