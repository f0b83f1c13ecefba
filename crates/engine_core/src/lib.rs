pub mod eval;
pub mod state;
pub mod types;

pub use eval::{evaluate, evaluate_for, piece_value, PIECE_VALUES};
pub use state::{GameState, IllegalMove};
pub use types::*;

use std::str::FromStr;
use std::time::Duration;


// =============================================================================
// Engine trait — implemented by all selection tiers (random, greedy, minimax)
// =============================================================================

/// Limits for a single search invocation.
///
/// Only depth is supported; searches run to the configured depth
/// unconditionally and there is no time-based cutoff.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves). Only the minimax tier reads it.
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Instrumentation collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited (one per recursive search call; zero for the
    /// tiers that do no look-ahead).
    pub nodes: u64,
    /// Wall-clock duration of the full root search.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Search throughput as `nodes * 1000 / elapsed_ms`.
    ///
    /// Returns `None` when the elapsed time rounds to zero milliseconds,
    /// so a fast search reports "unknown" instead of dividing by zero.
    pub fn nodes_per_second(&self) -> Option<u64> {
        let ms = self.elapsed.as_millis() as u64;
        if ms == 0 {
            None
        } else {
            Some(self.nodes * 1000 / ms)
        }
    }
}

/// Result of a search operation.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The chosen move (None means no legal moves: checkmate or draw).
    pub best_move: Option<M>,
    /// Score of the chosen move from the searching tier's perspective.
    pub score: i32,
    /// Depth the tier actually searched to.
    pub depth: u8,
    /// Node and timing instrumentation.
    pub stats: SearchStats,
}

/// Trait implemented by every selection tier.
///
/// The state is borrowed mutably for the duration of the call: search
/// tiers walk the game tree by applying and undoing moves on the shared
/// state rather than copying positions. On return the state is restored
/// to exactly what it was on entry.
pub trait Engine<S: GameState> {
    /// Picks a move for the side to move, or `None` at a terminal state.
    ///
    /// An `IllegalMove` error means the rules engine rejected a move it
    /// itself enumerated; the search is aborted with the state restored.
    fn search(
        &mut self,
        state: &mut S,
        limits: SearchLimits,
    ) -> Result<SearchResult<S::Move>, IllegalMove>;

    /// Returns the tier's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}

// =============================================================================
// Difficulty configuration
// =============================================================================

/// The single enumerated difficulty surface exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Random,
    Greedy,
    Minimax,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Difficulty::Random),
            "greedy" => Ok(Difficulty::Greedy),
            "minimax" => Ok(Difficulty::Minimax),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
