use super::*;
use cozy_adapter::{CozyState, Move};

const AFTER_E4_FEN: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

/// Independent two-ply oracle: the value of a root move is the worst
/// `-evaluate` reachable by any immediate reply.
fn two_ply_value(state: &mut CozyState, mv: Move) -> i32 {
    state.apply(mv).unwrap();
    let replies = state.legal_moves();
    let value = if replies.is_empty() {
        -evaluate(&state.snapshot())
    } else {
        let mut worst = i32::MAX;
        for reply in replies {
            state.apply(reply).unwrap();
            worst = worst.min(-evaluate(&state.snapshot()));
            state.undo();
        }
        worst
    };
    state.undo();
    value
}

#[test]
fn depth_one_agrees_with_the_one_ply_tier() {
    // Black queen on d5 takes the undefended white queen on d2 — the
    // same unique best move the greedy tier finds.
    let mut engine = MinimaxEngine::new();
    let mut state = CozyState::from_fen("k7/8/8/3q4/8/8/3Q4/K7 b - - 0 1").unwrap();

    let result = engine.search(&mut state, SearchLimits::depth(1)).unwrap();

    let expected: Move = "d5d2".parse().unwrap();
    assert_eq!(result.best_move, Some(expected));
    assert_eq!(result.score, 90);
}

#[test]
fn search_restores_the_state_at_every_depth() {
    for depth in 1..=3u8 {
        let mut engine = MinimaxEngine::new();
        let mut state = CozyState::from_fen(AFTER_E4_FEN).unwrap();
        let before = state.fen();

        engine.search(&mut state, SearchLimits::depth(depth)).unwrap();

        assert_eq!(state.fen(), before, "board corrupted at depth {depth}");
        assert_eq!(state.ply_depth(), 0);
    }
}

#[test]
fn node_counts_grow_geometrically_from_startpos() {
    // Every first move leaves the opponent exactly 20 replies, so the
    // counts are exact: 20 nodes at depth 1, 20 + 20*20 at depth 2.
    let mut engine = MinimaxEngine::new();
    let mut state = CozyState::startpos();

    let d1 = engine.search(&mut state, SearchLimits::depth(1)).unwrap();
    assert_eq!(d1.stats.nodes, 20);
    assert_eq!(engine.stats().nodes, 20);

    let d2 = engine.search(&mut state, SearchLimits::depth(2)).unwrap();
    assert_eq!(d2.stats.nodes, 420);
}

#[test]
fn depth_two_reply_to_e4_matches_a_two_ply_oracle() {
    let mut engine = MinimaxEngine::new();
    let mut state = CozyState::from_fen(AFTER_E4_FEN).unwrap();

    let result = engine.search(&mut state, SearchLimits::depth(2)).unwrap();
    let chosen = result.best_move.expect("black has legal moves after 1.e4");

    let best_value = state
        .legal_moves()
        .into_iter()
        .map(|mv| two_ply_value(&mut state, mv))
        .max()
        .unwrap();

    // The chosen move must not concede material any alternative avoids.
    assert_eq!(two_ply_value(&mut state, chosen), best_value);
    assert_eq!(result.score, best_value);
}

#[test]
fn terminal_positions_produce_no_move() {
    let mut engine = MinimaxEngine::new();

    let mut mate =
        CozyState::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    let result = engine.search(&mut mate, SearchLimits::depth(3)).unwrap();
    assert!(result.best_move.is_none());
    assert_eq!(result.stats.nodes, 0);

    let mut stalemate = CozyState::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let result = engine.search(&mut stalemate, SearchLimits::depth(3)).unwrap();
    assert!(result.best_move.is_none());
}

#[test]
fn depth_zero_is_clamped_to_one() {
    let mut engine = MinimaxEngine::new();
    let mut state = CozyState::startpos();

    let result = engine.search(&mut state, SearchLimits::depth(0)).unwrap();

    assert_eq!(result.depth, 1);
    assert!(result.best_move.is_some());
    assert_eq!(result.stats.nodes, 20);
}
