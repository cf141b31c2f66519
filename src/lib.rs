//! Strictly Minimax - an optimal tic-tac-toe player
//!
//! Wraps the pure game logic in [`strictly_tictactoe`] with what a
//! command-line front end needs.
//!
//! # Architecture
//!
//! - **Config**: engine settings loaded from TOML
//! - **Session**: engine-vs-engine games with a full transcript
//! - **Commands**: one function per subcommand, each returning a report
//! - **Output**: command results rendered as text or JSON
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{EngineConfig, Outcome, SelfPlay, initial_state};
//!
//! let mut session = SelfPlay::new(&EngineConfig::default());
//! let transcript = session.play(initial_state())?;
//! assert_eq!(transcript.outcome, Outcome::Draw);
//! # Ok::<(), strictly_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod output;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, EngineConfig};
pub use output::{Report, TextReport};
pub use session::{Ply, SelfPlay, Transcript};

pub use strictly_tictactoe::{
    Board, Cell, Move, MoveError, Outcome, ParseBoardError, ParseMoveError, Player, ScoredMove,
    SearchResult, Searcher, actions, best_move, check_reachable, initial_state, minimax, outcome,
    player, result, terminal, utility, value, winner,
};
