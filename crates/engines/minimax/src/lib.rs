//! Fixed-Depth Minimax Selection Tier
//!
//! Plain minimax with no pruning: the game tree lives on the call
//! stack, and the single shared state is walked with a strict
//! apply/undo pairing. Sides alternate between maximizing and
//! minimizing every ply.
//!
//! Leaves score `-evaluate(board)` regardless of which side is
//! maximizing, so the search optimizes the position for black. This
//! asymmetric convention is inherited deliberately (the tier's original
//! role was always the black side); see DESIGN.md before "fixing" it.

use std::time::Instant;

use engine_core::{
    evaluate, Engine, GameState, IllegalMove, SearchLimits, SearchResult, SearchStats,
};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// Exhaustive fixed-depth minimax.
///
/// Cost is exponential in depth times branching factor; the caller
/// bounds depth (1-4 is the practical range). Node and wall-clock
/// instrumentation from the last search stays readable via [`stats`].
///
/// [`stats`]: MinimaxEngine::stats
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    stats: SearchStats,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
        }
    }

    /// Instrumentation from the most recent search: node count, elapsed
    /// wall-clock time, and derived nodes-per-second.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Recursive tree walk. Counts one node per invocation (the root
    /// wrapper is not counted). An empty move list is scored as a leaf;
    /// only the root turns it into "no move".
    fn minimax<S: GameState>(
        &mut self,
        state: &mut S,
        depth: u8,
        maximizing: bool,
    ) -> Result<i32, IllegalMove> {
        self.stats.nodes += 1;

        if depth == 0 {
            return Ok(-evaluate(&state.snapshot()));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(-evaluate(&state.snapshot()));
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            state.apply(mv)?;
            let value = self.minimax(state, depth - 1, !maximizing);
            // Undo before propagating so every exit path restores the state.
            state.undo();
            let value = value?;

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }

    /// Root of the search: the mover maximizes, the immediate reply
    /// minimizes. All root moves tied at the best score are retained
    /// and one is picked uniformly at random after the full scan.
    fn search_root<S: GameState>(
        &mut self,
        state: &mut S,
        depth: u8,
    ) -> Result<(Option<S::Move>, i32), IllegalMove> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok((None, 0));
        }

        let mut best_score = i32::MIN;
        let mut best_moves: Vec<S::Move> = Vec::new();

        for mv in moves {
            state.apply(mv)?;
            let value = self.minimax(state, depth - 1, false);
            state.undo();
            let value = value?;

            if value > best_score {
                best_score = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_score {
                best_moves.push(mv);
            }
        }

        let best_move = best_moves.choose(&mut thread_rng()).copied();
        Ok((best_move, best_score))
    }
}

impl<S: GameState> Engine<S> for MinimaxEngine {
    fn search(
        &mut self,
        state: &mut S,
        limits: SearchLimits,
    ) -> Result<SearchResult<S::Move>, IllegalMove> {
        // Depth is a positive integer by contract; clamp to avoid underflow.
        let depth = limits.depth.max(1);

        self.stats = SearchStats::default();
        let start = Instant::now();
        let (best_move, score) = self.search_root(state, depth)?;
        self.stats.elapsed = start.elapsed();

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }
}
