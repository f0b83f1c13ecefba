//! One-Ply Greedy Selection Tier
//!
//! Scores every legal move by the material balance it leaves on the
//! board and plays the best one, with no look-ahead into opponent
//! replies. Ties are broken uniformly at random; without that the tier
//! degenerates into predictable shuffling of the same piece.

use engine_core::{
    evaluate_for, Engine, GameState, IllegalMove, SearchLimits, SearchResult, SearchStats,
};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A selection tier that captures the best available material this
/// move. "Best" is the exact integer maximum of the one-ply evaluation;
/// every move achieving it stays in the candidate set.
#[derive(Debug, Clone, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Engine<S> for GreedyEngine {
    fn search(
        &mut self,
        state: &mut S,
        _limits: SearchLimits,
    ) -> Result<SearchResult<S::Move>, IllegalMove> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult {
                best_move: None,
                score: 0,
                depth: 1,
                stats: SearchStats::default(),
            });
        }

        let side = state.side_to_move();
        let mut best_score = i32::MIN;
        let mut best_moves: Vec<S::Move> = Vec::new();

        for mv in moves {
            state.apply(mv)?;
            let score = evaluate_for(&state.snapshot(), side);
            state.undo();

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        let best_move = best_moves.choose(&mut thread_rng()).copied();

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth: 1,
            stats: SearchStats::default(),
        })
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
