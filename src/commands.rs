//! One function per subcommand, each producing a [`Report`].

use crate::config::EngineConfig;
use crate::output::Report;
use crate::session::SelfPlay;
use strictly_tictactoe::{
    Board, Move, MoveError, Searcher, best_move, check_reachable, outcome, player, result,
};
use tracing::{debug, info, instrument};

/// Boards that cannot come from legal play are still searched.
fn note_unreachable(board: &Board) {
    if let Err(violations) = check_reachable(board) {
        debug!(count = violations.len(), "Searching unreachable board anyway");
    }
}

fn searcher(config: &EngineConfig) -> Searcher {
    Searcher::new().parallel(*config.parallel())
}

/// Finds the optimal move for the side to move.
#[instrument(skip(config, board), fields(board = %board.compact()))]
pub fn best(config: &EngineConfig, board: Board) -> Report {
    note_unreachable(&board);
    let found = searcher(config).search(&board);
    info!(best_move = ?found.best_move, nodes = found.nodes, "Best move found");

    Report::Best {
        board,
        to_move: player(&board),
        outcome: outcome(&board),
        best_move: found.best_move,
        value: found.value,
        nodes: found.nodes,
    }
}

/// Scores every legal move.
#[instrument(skip(config, board), fields(board = %board.compact()))]
pub fn analyze(config: &EngineConfig, board: Board) -> Report {
    note_unreachable(&board);
    let mut searcher = searcher(config);
    let moves = searcher.evaluate_moves(&board);
    let best = best_move(player(&board), &moves).map(|scored| scored.mv);
    info!(moves = moves.len(), nodes = searcher.nodes(), "Analysis complete");

    Report::Analyze {
        board,
        to_move: player(&board),
        outcome: outcome(&board),
        moves,
        best_move: best,
        nodes: searcher.nodes(),
    }
}

/// Plays `mv` for the side to move.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the cell is occupied.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn apply(board: Board, mv: Move) -> Result<Report, MoveError> {
    note_unreachable(&board);
    let after = result(&board, mv)?;

    Ok(Report::Apply {
        player: player(&board),
        mv,
        before: board,
        after,
        outcome: outcome(&after),
    })
}

/// Plays the engine against itself from `start`.
///
/// # Errors
///
/// Propagates a [`MoveError`] from [`SelfPlay::play`].
#[instrument(skip(config, start), fields(start = %start.compact()))]
pub fn self_play(config: &EngineConfig, start: Board) -> Result<Report, MoveError> {
    note_unreachable(&start);
    let mut session = SelfPlay::new(config);
    let transcript = session.play(start)?;

    Ok(Report::SelfPlay {
        transcript,
        nodes: session.nodes(),
    })
}
