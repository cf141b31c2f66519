//! Tests for optimal play.

use strictly_minimax::{
    Board, Move, Player, Searcher, initial_state, minimax, player, result, terminal, utility,
    value,
};

#[test]
fn test_forced_win_is_taken() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mv = minimax(&board).unwrap();
    assert_eq!(mv, Move::new(0, 2));

    let after = result(&board, mv).unwrap();
    assert!(terminal(&after));
    assert_eq!(utility(&after), 1);
}

#[test]
fn test_o_takes_its_own_win() {
    let board: Board = "XX./OO./X..".parse().unwrap();
    assert_eq!(player(&board), Player::O);
    assert_eq!(minimax(&board), Some(Move::new(1, 2)));
}

#[test]
fn test_diagonal_threat_is_blocked() {
    let board: Board = "X../.X./...".parse().unwrap();
    assert_eq!(minimax(&board), Some(Move::new(2, 2)));
}

#[test]
fn test_perfect_play_draws() {
    let mut board = initial_state();
    while !terminal(&board) {
        let mv = minimax(&board).unwrap();
        board = result(&board, mv).unwrap();
    }
    assert_eq!(utility(&board), 0);
    assert_eq!(board.marks(), 9);
}

#[test]
fn test_every_opening_draws() {
    let board = initial_state();
    for mv in Move::ALL {
        let after = result(&board, mv).unwrap();
        assert_eq!(value(&after), 0, "{mv}");
    }
}

#[test]
fn test_no_move_on_finished_game() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(minimax(&board), None);
    let found = Searcher::new().search(&board);
    assert_eq!(found.best_move, None);
    assert_eq!(found.nodes, 0);
}

#[test]
fn test_minimax_is_deterministic() {
    let board: Board = "X...O....".parse().unwrap();
    let first = minimax(&board);
    assert_eq!(minimax(&board), first);
}
