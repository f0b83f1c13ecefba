//! Match result tallies and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game, from engine1's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Flips perspective (engine1 played the other color).
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Tallied outcome of a match, from engine1's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Search depth the match was played at.
    pub depth: u8,
}

impl MatchSummary {
    pub fn new(engine1: &str, engine2: &str, depth: u8) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            depth,
        }
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Save the summary to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Generate a one-line text report.
    pub fn report(&self) -> String {
        format!(
            "{} vs {} (depth {}): {}-{}-{} over {} games",
            self.engine1,
            self.engine2,
            self.depth,
            self.wins,
            self.losses,
            self.draws,
            self.total_games()
        )
    }
}
