//! Engine-driven game sessions.
//!
//! A session owns the board between moves, the way any front end would:
//! it asks the engine for a move, applies it with `result`, and stops as
//! soon as the board is terminal.

use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    outcome, player, result, utility, Board, Move, MoveError, Outcome, Player,
    Searcher,
};
use tracing::{debug, info, instrument};

/// One move played in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Who moved.
    pub player: Player,
    /// The move played.
    pub mv: Move,
    /// Minimax value of the move, from X's point of view.
    pub value: i8,
    /// Positions the search visited to find the move.
    pub nodes: u64,
    /// The board after the move.
    pub board: Board,
}

/// A finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Board the session started from.
    pub start: Board,
    /// Moves in the order they were played.
    pub plies: Vec<Ply>,
    /// Final board.
    pub finish: Board,
    /// How the game ended.
    pub outcome: Outcome,
    /// Utility of the final board.
    pub utility: i8,
}

/// Plays the engine against itself until the game ends.
#[derive(Debug, Clone)]
pub struct SelfPlay {
    searcher: Searcher,
}

impl SelfPlay {
    /// Creates a self-play session using the given engine settings.
    #[instrument(skip(config), fields(parallel = config.parallel()))]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            searcher: Searcher::new().parallel(*config.parallel()),
        }
    }

    /// Plays from `start` until the board is terminal.
    ///
    /// # Errors
    ///
    /// Only moves chosen by the engine are applied, so a
    /// [`MoveError`] here means the engine proposed an occupied cell.
    #[instrument(skip(self, start), fields(start = %start.compact()))]
    pub fn play(&mut self, start: Board) -> Result<Transcript, MoveError> {
        let mut board = start;
        let mut plies = Vec::new();

        while !outcome(&board).is_over() {
            let to_move = player(&board);
            let found = self.searcher.search(&board);
            let (Some(mv), Some(value)) = (found.best_move, found.value) else {
                break;
            };

            board = result(&board, mv)?;
            debug!(%to_move, %mv, value, nodes = found.nodes, "Ply played");
            plies.push(Ply {
                player: to_move,
                mv,
                value,
                nodes: found.nodes,
                board,
            });
        }

        let transcript = Transcript {
            start,
            plies,
            finish: board,
            outcome: outcome(&board),
            utility: utility(&board),
        };
        info!(
            outcome = %transcript.outcome,
            plies = transcript.plies.len(),
            "Self-play finished"
        );
        Ok(transcript)
    }

    /// Total positions searched across the session.
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::initial_state;

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let mut session = SelfPlay::new(&EngineConfig::default());
        let transcript = session.play(initial_state()).unwrap();
        assert_eq!(transcript.outcome, Outcome::Draw);
        assert_eq!(transcript.utility, 0);
        assert_eq!(transcript.plies.len(), 9);
        assert_eq!(transcript.plies[0].mv, Move::new(0, 0));
    }

    #[test]
    fn test_self_play_on_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut session = SelfPlay::new(&EngineConfig::default());
        let transcript = session.play(board).unwrap();
        assert!(transcript.plies.is_empty());
        assert_eq!(transcript.outcome, Outcome::XWins);
        assert_eq!(transcript.finish, board);
        assert_eq!(session.nodes(), 0);
    }

    #[test]
    fn test_players_alternate() {
        let mut session = SelfPlay::new(&EngineConfig::default());
        let transcript = session.play(initial_state()).unwrap();
        for pair in transcript.plies.windows(2) {
            assert_eq!(pair[1].player, pair[0].player.opponent());
        }
    }
}
