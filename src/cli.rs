//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_tictactoe::{Board, Move};

/// Strictly Minimax - optimal tic-tac-toe moves by exhaustive search
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` or `_` for
/// empty. Whitespace and `/ | , - +` are ignored, so `X../.O./...` works.
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_minimax.toml if present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Evaluate root moves in parallel, regardless of the config file
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    Best {
        /// The board to search
        board: Board,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// The board to analyze
        board: Board,
    },

    /// Play one move for the side to move and print the new board
    Apply {
        /// The board to play on
        board: Board,

        /// The cell to mark, as `row,col`
        #[arg(value_name = "ROW,COL")]
        mv: Move,
    },

    /// Let the engine play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,
    },
}
