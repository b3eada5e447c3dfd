//! End-to-end scenarios driven through the public `Board` API, the same way
//! a presentation layer would: select, read highlights, submit moves.

use chessboard_engine::{Board, Color, Kind, Square};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn pawn_opening_scenario() {
    init_logger();
    let mut board = Board::new();

    // The e-pawn offers both the single and the double push.
    let moves = board.legal_destinations(sq("14"));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&sq("24")));
    assert!(moves.contains(&sq("34")));

    assert!(board.try_move(sq("14"), sq("34")));
    assert_eq!(board.turn(), Color::Black);

    // Once Black has replied, the advanced pawn is down to a single step.
    assert!(board.try_move(sq("64"), sq("44")));
    let moves = board.legal_destinations(sq("34"));
    assert!(moves.is_empty(), "blocked head-on by the black pawn");

    assert!(board.try_move(sq("13"), sq("33")));
    assert!(board.try_move(sq("44"), sq("33")), "pawn takes pawn");
    let taken = board.piece_at(sq("33")).unwrap();
    assert_eq!((taken.color, taken.kind), (Color::Black, Kind::Pawn));
}

#[test]
fn queenside_knight_scenario() {
    init_logger();
    let board = Board::new();

    let moves = board.legal_destinations(sq("01"));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&sq("20")));
    assert!(moves.contains(&sq("22")));
}

#[test]
fn wrong_turn_requests_are_absorbed() {
    init_logger();
    let mut board = Board::new();

    assert!(board.legal_destinations(sq("64")).is_empty());
    assert!(!board.try_move(sq("64"), sq("44")));
    assert_eq!(board.turn(), Color::White);
    assert_eq!(*board.position(), *Board::new().position());
}

#[test]
fn drag_gesture_workflow() {
    init_logger();
    let mut board = Board::new();

    // Drag start: select, highlights appear.
    board.select(sq("06"));
    assert!(board.position().tile(sq("06")).selected);
    assert!(board.position().tile(sq("25")).legal_target);

    // Drop on an illegal tile: nothing moves, turn unchanged.
    assert!(!board.try_move(sq("06"), sq("44")));
    assert_eq!(board.turn(), Color::White);

    // Drop on a highlighted tile: move lands, all flags reset.
    assert!(board.try_move(sq("06"), sq("25")));
    assert!(board
        .position()
        .tiles()
        .iter()
        .all(|t| !t.selected && !t.legal_target));
    assert_eq!(board.turn(), Color::Black);
}

#[test]
fn reset_after_scrambling() {
    init_logger();
    let mut board = Board::new();

    board.try_move(sq("14"), sq("34"));
    board.relocate(sq("00"), sq("44"));
    board.relocate(sq("77"), sq("55"));
    board.select(sq("44"));

    board.reset();
    let fresh = Board::new();
    assert_eq!(*board.position(), *fresh.position());
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn programmatic_setup_with_relocate() {
    init_logger();
    let mut board = Board::new();

    // Drag the white king into the middle of the board, ignoring legality.
    board.relocate(sq("04"), sq("33"));
    assert_eq!(board.piece_at(sq("33")).map(|p| p.kind), Some(Kind::King));
    assert!(board.piece_at(sq("04")).is_none());
    assert_eq!(board.turn(), Color::White, "setup leaves the turn alone");

    // The relocated king plays by the normal rules afterwards.
    let moves = board.legal_destinations(sq("33"));
    assert_eq!(moves.len(), 8);
}
