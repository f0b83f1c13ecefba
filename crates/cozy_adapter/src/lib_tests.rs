use super::*;
use engine_core::evaluate;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const SCHOLARS_MATE_FEN: &str =
    "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
const STALEMATE_FEN: &str = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";

#[test]
fn startpos_has_twenty_legal_moves() {
    let state = CozyState::startpos();
    assert_eq!(state.legal_moves().len(), 20);
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.terminal(), Terminal::Ongoing);
}

#[test]
fn moves_from_filters_by_source_square() {
    let state = CozyState::startpos();
    let e2 = engine_core::coord_to_sq("e2").unwrap();
    let from_e2 = state.moves_from(e2);
    assert_eq!(from_e2.len(), 2); // e3 and e4
    assert!(from_e2.iter().all(|mv| mv.from.to_string() == "e2"));
    assert!(state.moves_from(200).is_empty());
}

#[test]
fn apply_then_undo_restores_the_board() {
    let mut state = CozyState::startpos();
    let before = state.fen();
    let mv: Move = "e2e4".parse().unwrap();

    state.apply(mv).unwrap();
    assert_ne!(state.fen(), before);
    assert_eq!(state.ply_depth(), 1);

    state.undo();
    assert_eq!(state.fen(), before);
    assert_eq!(state.board().hash(), CozyState::startpos().board().hash());
    assert_eq!(state.ply_depth(), 0);
}

#[test]
fn illegal_move_is_rejected_and_state_unchanged() {
    let mut state = CozyState::startpos();
    let before = state.fen();
    let mv: Move = "e2e5".parse().unwrap();

    let err = state.apply(mv);
    assert!(err.is_err());
    assert_eq!(state.fen(), before);
    assert_eq!(state.ply_depth(), 0);
}

#[test]
#[should_panic(expected = "undo without a matching apply")]
fn unmatched_undo_panics() {
    let mut state = CozyState::startpos();
    state.undo();
}

#[test]
fn terminal_classification() {
    let mate = CozyState::from_fen(SCHOLARS_MATE_FEN).unwrap();
    assert_eq!(mate.terminal(), Terminal::Checkmate);
    assert!(mate.legal_moves().is_empty());

    let stalemate = CozyState::from_fen(STALEMATE_FEN).unwrap();
    assert_eq!(stalemate.terminal(), Terminal::Draw);
    assert!(stalemate.legal_moves().is_empty());
}

#[test]
fn snapshot_matches_the_position() {
    let state = CozyState::from_fen(STARTPOS_FEN).unwrap();
    let board = state.snapshot();

    assert_eq!(evaluate(&board), 0);
    assert_eq!(
        board[1][4],
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(
        board[7][3],
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(board[4][4], None);
}
