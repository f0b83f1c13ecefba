//! The consumed rules-engine contract.
//!
//! Move generation, legality, check/mate/draw detection and move
//! application all live behind this trait. The selectors drive it with
//! a strict apply/undo pairing: every `apply` issued during a search is
//! reversed by exactly one `undo`, in reverse order, before the search
//! returns.

use thiserror::Error;

use crate::types::{BoardSnapshot, Color, Terminal};

/// A move was rejected by the rules engine. The game state is unchanged.
#[derive(Debug, Clone, Error)]
#[error("illegal move rejected by the rules engine: {notation}")]
pub struct IllegalMove {
    pub notation: String,
}

impl IllegalMove {
    pub fn new(notation: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
        }
    }
}

/// Mutable game state owned by an external rules engine.
///
/// The selectors treat `Move` as an opaque, equality-comparable handle:
/// values obtained from `legal_moves` are passed back into `apply`
/// unchanged and never inspected.
pub trait GameState {
    type Move: Copy + Eq + std::fmt::Debug;

    /// Legal moves for the side to move. Empty means the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Legal moves originating from a single square (0..63, a1 = 0).
    /// Used by presentation code for highlighting, never by search.
    fn moves_from(&self, from: u8) -> Vec<Self::Move>;

    /// Applies `mv`, mutating the shared state. An illegal move leaves
    /// the state untouched and is reported, never silently applied.
    fn apply(&mut self, mv: Self::Move) -> Result<(), IllegalMove>;

    /// Reverses exactly the most recent unmatched `apply`.
    ///
    /// # Panics
    ///
    /// Panics if there is no unmatched `apply` — that is a caller bug,
    /// not a recoverable condition.
    fn undo(&mut self);

    /// Classifies the current position for the side to move.
    fn terminal(&self) -> Terminal;

    fn side_to_move(&self) -> Color;

    /// Snapshot of the board exactly as of this call.
    fn snapshot(&self) -> BoardSnapshot;
}
