//! Random Move Selection Tier
//!
//! The lowest difficulty: selects uniformly at random from all legal
//! moves. Useful for:
//! - Testing the adapter and runner plumbing
//! - Baseline comparisons (any real tier should easily beat this)
//! - Low-strength gameplay

use engine_core::{Engine, GameState, IllegalMove, SearchLimits, SearchResult, SearchStats};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A selection tier that plays random legal moves.
///
/// No evaluation, no look-ahead. An empty legal-move list yields no
/// move, which signals a terminal position to the caller.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Engine<S> for RandomEngine {
    fn search(
        &mut self,
        state: &mut S,
        _limits: SearchLimits,
    ) -> Result<SearchResult<S::Move>, IllegalMove> {
        let moves = state.legal_moves();
        let best_move = moves.choose(&mut thread_rng()).copied();

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 0,
            stats: SearchStats::default(),
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
