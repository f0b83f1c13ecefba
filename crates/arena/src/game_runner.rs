//! Game loop for playing the selection tiers against each other.

use anyhow::Result;

use cozy_adapter::CozyState;
use engine_core::{Color, Difficulty, Engine, GameState, SearchLimits, Terminal};
use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

use crate::results::{GameResult, MatchSummary};

/// A selection tier bound to the cozy-chess adapter.
pub type BoxedEngine = Box<dyn Engine<CozyState>>;

/// Builds the tier for a difficulty setting.
pub fn create_engine(difficulty: Difficulty) -> BoxedEngine {
    match difficulty {
        Difficulty::Random => Box::new(RandomEngine::new()),
        Difficulty::Greedy => Box::new(GreedyEngine::new()),
        Difficulty::Minimax => Box::new(MinimaxEngine::new()),
    }
}

/// Configuration for a match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth handed to the minimax tier
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print per-move search statistics and game outcomes
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 2,
            max_plies: 400,
            alternate_colors: true,
            verbose: false,
        }
    }
}

/// Runs matches between two selection tiers.
pub struct GameRunner {
    config: MatchConfig,
}

impl GameRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match; the summary is from engine1's perspective.
    pub fn run_match(
        &self,
        name1: &str,
        engine1: &mut dyn Engine<CozyState>,
        name2: &str,
        engine2: &mut dyn Engine<CozyState>,
    ) -> Result<MatchSummary> {
        let mut summary = MatchSummary::new(name1, name2, self.config.depth);

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?.flipped()
            };
            summary.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    summary.wins,
                    summary.losses,
                    summary.draws
                );
            }
        }

        Ok(summary)
    }

    /// Play a single game; the result is from white's perspective.
    pub fn play_game(
        &self,
        white: &mut dyn Engine<CozyState>,
        black: &mut dyn Engine<CozyState>,
    ) -> Result<GameResult> {
        let mut state = CozyState::startpos();
        white.new_game();
        black.new_game();

        for _ply in 0..self.config.max_plies {
            let limits = SearchLimits::depth(self.config.depth);
            let side = state.side_to_move();

            let result = match side {
                Color::White => white.search(&mut state, limits)?,
                Color::Black => black.search(&mut state, limits)?,
            };

            let mv = match result.best_move {
                Some(mv) => mv,
                // No legal moves: translate into the terminal outcome.
                None => {
                    return Ok(match state.terminal() {
                        Terminal::Checkmate => match side {
                            Color::White => GameResult::Loss,
                            Color::Black => GameResult::Win,
                        },
                        _ => GameResult::Draw,
                    });
                }
            };

            if self.config.verbose && result.stats.nodes > 0 {
                let nps = result
                    .stats
                    .nodes_per_second()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {mv}: {} nodes in {:?} ({nps} nps)",
                    result.stats.nodes, result.stats.elapsed
                );
            }

            state.apply(mv)?;

            if state.terminal() == Terminal::Draw {
                return Ok(GameResult::Draw);
            }
        }

        // Ply limit reached
        Ok(GameResult::Draw)
    }
}

/// Quick utility to run a single match between two difficulty settings.
pub fn quick_match(
    difficulty1: Difficulty,
    difficulty2: Difficulty,
    num_games: u32,
    depth: u8,
) -> Result<MatchSummary> {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let mut engine1 = create_engine(difficulty1);
    let mut engine2 = create_engine(difficulty2);
    let name1 = engine1.name().to_string();
    let name2 = engine2.name().to_string();

    GameRunner::new(config).run_match(&name1, engine1.as_mut(), &name2, engine2.as_mut())
}
