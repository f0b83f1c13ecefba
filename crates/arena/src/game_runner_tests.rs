use crate::*;
use engine_core::Difficulty;

#[test]
fn create_engine_maps_every_difficulty() {
    assert_eq!(create_engine(Difficulty::Random).name(), "Random v1.0");
    assert_eq!(create_engine(Difficulty::Greedy).name(), "Greedy v1.0");
    assert_eq!(create_engine(Difficulty::Minimax).name(), "Minimax v1.0");
}

#[test]
fn random_vs_random_game_terminates() {
    let config = MatchConfig {
        num_games: 1,
        max_plies: 60,
        verbose: false,
        ..Default::default()
    };
    let runner = GameRunner::new(config);
    let mut white = create_engine(Difficulty::Random);
    let mut black = create_engine(Difficulty::Random);

    // Must finish within the ply bound without corrupting state.
    let result = runner.play_game(white.as_mut(), black.as_mut()).unwrap();
    assert!(matches!(
        result,
        GameResult::Win | GameResult::Loss | GameResult::Draw
    ));
}

#[test]
fn match_summary_tallies_every_game() {
    let summary = quick_match(Difficulty::Random, Difficulty::Random, 4, 1).unwrap();
    assert_eq!(summary.total_games(), 4);
    assert_eq!(summary.wins + summary.losses + summary.draws, 4);
    assert!(summary.report().contains("over 4 games"));
}

#[test]
fn flipped_results_swap_perspective() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}
