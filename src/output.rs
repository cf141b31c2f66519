//! Rendering of command results as text or JSON.

use crate::session::Transcript;
use serde::Serialize;
use std::fmt;
use strictly_tictactoe::{Board, Move, Outcome, Player, ScoredMove};

/// The result of one command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Report {
    /// Optimal move for a board.
    Best {
        /// Board searched.
        board: Board,
        /// Side to move.
        to_move: Player,
        /// Outcome of the board as given.
        outcome: Outcome,
        /// Optimal move, `None` if the game is over.
        best_move: Option<Move>,
        /// Value of the optimal move.
        value: Option<i8>,
        /// Positions visited.
        nodes: u64,
    },
    /// Every legal move with its value.
    Analyze {
        /// Board searched.
        board: Board,
        /// Side to move.
        to_move: Player,
        /// Outcome of the board as given.
        outcome: Outcome,
        /// Root moves in enumeration order.
        moves: Vec<ScoredMove>,
        /// The move the engine would choose.
        best_move: Option<Move>,
        /// Positions visited.
        nodes: u64,
    },
    /// A single move applied to a board.
    Apply {
        /// Side that moved.
        player: Player,
        /// Move played.
        mv: Move,
        /// Board before the move.
        before: Board,
        /// Board after the move.
        after: Board,
        /// Outcome after the move.
        outcome: Outcome,
    },
    /// An engine-vs-engine game.
    SelfPlay {
        /// Full record of the game.
        transcript: Transcript,
        /// Positions visited across all searches.
        nodes: u64,
    },
}

impl Report {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable rendering, with node counts when `show_nodes` is set.
    pub fn text(&self, show_nodes: bool) -> TextReport<'_> {
        TextReport {
            report: self,
            show_nodes,
        }
    }

    fn write_text(&self, out: &mut fmt::Formatter<'_>, show_nodes: bool) -> fmt::Result {
        match self {
            Report::Best {
                board,
                to_move,
                outcome,
                best_move,
                value,
                nodes,
            } => {
                writeln!(out, "{board}")?;
                match (best_move, value) {
                    (Some(mv), Some(value)) => {
                        writeln!(out, "To move: {to_move}")?;
                        writeln!(out, "Best move: {mv} (value {})", signed(*value))?;
                    }
                    _ => writeln!(out, "Game over: {outcome}")?,
                }
                if show_nodes {
                    writeln!(out, "Nodes: {nodes}")?;
                }
            }
            Report::Analyze {
                board,
                to_move,
                outcome,
                moves,
                best_move,
                nodes,
            } => {
                writeln!(out, "{board}")?;
                if moves.is_empty() {
                    writeln!(out, "Game over: {outcome}")?;
                } else {
                    writeln!(out, "To move: {to_move}")?;
                    for scored in moves {
                        let marker = if Some(scored.mv) == *best_move {
                            "  <- best"
                        } else {
                            ""
                        };
                        writeln!(out, "  {}  {:>2}{marker}", scored.mv, signed(scored.value))?;
                    }
                }
                if show_nodes {
                    writeln!(out, "Nodes: {nodes}")?;
                }
            }
            Report::Apply {
                player,
                mv,
                after,
                outcome,
                ..
            } => {
                writeln!(out, "{player} plays {mv}")?;
                writeln!(out, "{after}")?;
                writeln!(out, "Outcome: {outcome}")?;
            }
            Report::SelfPlay { transcript, nodes } => {
                writeln!(out, "{}", transcript.start)?;
                for (i, ply) in transcript.plies.iter().enumerate() {
                    writeln!(out)?;
                    write!(out, "{}. {} plays {}", i + 1, ply.player, ply.mv)?;
                    if show_nodes {
                        write!(out, " ({} nodes)", ply.nodes)?;
                    }
                    writeln!(out)?;
                    writeln!(out, "{}", ply.board)?;
                }
                writeln!(out)?;
                writeln!(
                    out,
                    "Result: {} (utility {})",
                    transcript.outcome,
                    signed(transcript.utility)
                )?;
                if show_nodes {
                    writeln!(out, "Nodes: {nodes}")?;
                }
            }
        }
        Ok(())
    }
}

/// A [`Report`] formatted as text by its `Display` impl.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    report: &'a Report,
    show_nodes: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.write_text(f, self.show_nodes)
    }
}

fn signed(value: i8) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
