//! Material-based position evaluation.

use crate::types::{BoardSnapshot, Color, Piece};

/// Material values indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [10, 29, 31, 50, 90, 900];

/// Signed value of a single piece: positive for white, negative for black.
pub fn piece_value(piece: Piece) -> i32 {
    let value = PIECE_VALUES[piece.kind.idx()];
    match piece.color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Evaluates a board snapshot from white's perspective.
///
/// Pure material sum over all 64 squares:
/// - Positive = white has more material
/// - Negative = black has more material
/// - 0 = material is balanced
pub fn evaluate(board: &BoardSnapshot) -> i32 {
    let mut total = 0i32;
    for rank in board.iter() {
        for square in rank.iter() {
            if let Some(piece) = square {
                total += piece_value(*piece);
            }
        }
    }
    total
}

/// Convenience for the one-ply tier: evaluation seen from `side`.
pub fn evaluate_for(board: &BoardSnapshot, side: Color) -> i32 {
    let score = evaluate(board);
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}
