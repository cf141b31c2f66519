//! Tests for engine-vs-engine sessions and their reports.

use strictly_minimax::{
    Board, EngineConfig, Move, Outcome, Report, SelfPlay, check_reachable, commands,
    initial_state,
};

#[test]
fn test_self_play_from_midgame() {
    // X can win at once through the top row.
    let start: Board = "XX./OO./...".parse().unwrap();
    let mut session = SelfPlay::new(&EngineConfig::default());
    let transcript = session.play(start).unwrap();

    assert_eq!(transcript.plies.len(), 1);
    assert_eq!(transcript.plies[0].mv, Move::new(0, 2));
    assert_eq!(transcript.outcome, Outcome::XWins);
    assert_eq!(transcript.utility, 1);
    assert_eq!(session.nodes(), 156);
}

#[test]
fn test_parallel_session_plays_same_game() {
    let sequential = SelfPlay::new(&EngineConfig::default())
        .play(initial_state())
        .unwrap();
    let parallel = SelfPlay::new(&EngineConfig::default().with_parallel(true))
        .play(initial_state())
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_every_ply_is_reachable() {
    let transcript = SelfPlay::new(&EngineConfig::default())
        .play(initial_state())
        .unwrap();
    for ply in &transcript.plies {
        assert!(check_reachable(&ply.board).is_ok(), "{}", ply.board);
    }
    assert_eq!(transcript.finish, transcript.plies[8].board);
}

#[test]
fn test_self_play_report() {
    let start: Board = "XX./OO./...".parse().unwrap();
    let mut session = SelfPlay::new(&EngineConfig::default());
    let transcript = session.play(start).unwrap();
    let report = Report::SelfPlay {
        transcript,
        nodes: session.nodes(),
    };

    let text = report.text(true).to_string();
    assert!(text.contains("1. X plays (0, 2) (156 nodes)"));
    assert!(text.contains("Result: X wins (utility +1)"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["command"], "self-play");
    assert_eq!(json["transcript"]["finish"], "XXXOO....");
    assert_eq!(json["transcript"]["outcome"], "XWins");
}

#[test]
fn test_apply_on_occupied_cell_fails() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let err = commands::apply(board, Move::new(1, 0)).unwrap_err();
    assert_eq!(err.to_string(), "invalid move (1, 0): cell is already occupied");
}
