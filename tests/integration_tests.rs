//! Integration tests for minimax-four
//!
//! These exercise the driver-facing contract: `choose_move`, `apply_move`
//! and `check_outcome`, plus the search properties that must hold on any
//! position reachable in play.

use minimax_four::arena::random_column;
use minimax_four::board::{Board, MoveError, Player};
use minimax_four::config::EngineConfig;
use minimax_four::constants::{COLS, ROWS, WIN_SCORE};
use minimax_four::eval::{Evaluator, EvaluatorKind, RunEvaluator, WindowEvaluator};
use minimax_four::game::{Game, apply_move};
use minimax_four::rules::{Outcome, check_outcome, has_four_in_a_row, is_terminal};
use minimax_four::search::{Algorithm, EngineError, choose_move, search};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Parse a board diagram, top row first.
fn board(diagram: &str) -> Board {
    diagram
        .parse()
        .unwrap_or_else(|err| panic!("bad diagram {diagram}: {err}"))
}

/// Play the given 1-based columns alternately, starting with player one.
fn setup_game(columns: &[usize]) -> Game {
    let mut game = Game::new();
    for &col in columns {
        game.apply_move(col - 1)
            .unwrap_or_else(|err| panic!("illegal setup move {col}: {err}"));
    }
    game
}

/// Ongoing positions reached by random play, for property checks.
fn random_positions(count: usize, seed: u64) -> Vec<Game> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut positions = Vec::new();
    while positions.len() < count {
        let mut game = Game::new();
        let moves = rng.usize(4..20);
        for _ in 0..moves {
            let Some(col) = random_column(game.board(), &mut rng) else {
                break;
            };
            game.apply_move(col).unwrap();
            if game.outcome().is_over() {
                break;
            }
        }
        if !game.outcome().is_over() {
            positions.push(game);
        }
    }
    positions
}

fn config(depth: u32, algorithm: Algorithm, evaluator: EvaluatorKind) -> EngineConfig {
    EngineConfig::new(depth, algorithm, evaluator).unwrap()
}

const DRAWN_BOARD: &str = "XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX";

// =============================================================================
// Board state
// =============================================================================

#[test]
fn test_illegal_drop_never_changes_board() {
    for game in random_positions(20, 11) {
        let col = game.board().legal_columns().next().unwrap();
        let mut b = *game.board();
        while b.is_legal(col) {
            b.drop_piece(col, game.to_move()).unwrap();
        }
        let before = b;
        assert_eq!(
            apply_move(&mut b, col, Player::One),
            Err(MoveError::ColumnFull(col))
        );
        assert_eq!(b, before);
        let off_board = COLS + 3;
        assert_eq!(
            apply_move(&mut b, off_board, Player::Two),
            Err(MoveError::InvalidColumn(off_board))
        );
        assert_eq!(b, before);
    }
}

#[test]
fn test_column_illegal_exactly_when_top_filled() {
    let mut b = Board::new();
    for height in 0..ROWS {
        assert!(b.is_legal(5));
        assert_eq!(apply_move(&mut b, 5, Player::Two), Ok(height));
    }
    assert!(!b.is_legal(5));
    assert_eq!(b.legal_columns().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 6]);
}

// =============================================================================
// Terminal detection
// =============================================================================

#[test]
fn test_four_detected_in_all_directions() {
    let cases = [
        ("......./......./......./......./......./.OOOO.X", Player::Two),
        ("......./......./X....../X....../XO...../XOO....", Player::One),
        ("......./......./...X.../..XO.../.XOO.../XOOXO..", Player::One),
        ("......./......./...O.../...XO../...XXO./...XXXO", Player::Two),
    ];
    for (diagram, winner) in cases {
        let b = board(diagram);
        assert!(has_four_in_a_row(&b, winner), "{diagram}");
        assert!(!has_four_in_a_row(&b, winner.opponent()), "{diagram}");
        assert!(is_terminal(&b));
        assert_eq!(check_outcome(&b), Outcome::Win(winner));
    }
}

#[test]
fn test_three_does_not_win() {
    let cases = [
        "......./......./......./......./......./.OOO..X",
        "......./......./......./X....../XO...../XOO....",
        "......./......./......./..XO.../.XOO.../XOOX...",
    ];
    for diagram in cases {
        let b = board(diagram);
        assert_eq!(check_outcome(&b), Outcome::Ongoing, "{diagram}");
    }
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluators_are_pure() {
    for game in random_positions(10, 5) {
        let b = game.board();
        for player in [Player::One, Player::Two] {
            let window = WindowEvaluator.evaluate(b, player);
            let runs = RunEvaluator.evaluate(b, player);
            assert_eq!(WindowEvaluator.evaluate(b, player), window);
            assert_eq!(RunEvaluator.evaluate(b, player), runs);
            assert_eq!(RunEvaluator.evaluate(b, player.opponent()), -runs);
        }
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_pruning_never_changes_the_result() {
    for game in random_positions(12, 2024) {
        let player = game.to_move();
        for evaluator in [EvaluatorKind::Window, EvaluatorKind::Runs] {
            for depth in [1, 3, 4] {
                let plain_config = config(depth, Algorithm::Minimax, evaluator);
                let pruned_config = config(depth, Algorithm::AlphaBeta, evaluator);
                let plain = search(game.board(), player, &plain_config);
                let pruned = search(game.board(), player, &pruned_config);
                assert_eq!(plain.column, pruned.column, "history {:?}", game.history());
                assert_eq!(plain.score, pruned.score, "history {:?}", game.history());
                assert!(pruned.stats.nodes <= plain.stats.nodes);
            }
        }
    }
}

#[test]
fn test_chosen_column_is_always_legal() {
    for game in random_positions(15, 77) {
        let col = choose_move(game.board(), game.to_move(), &EngineConfig::default()).unwrap();
        assert!(game.board().is_legal(col), "history {:?}", game.history());
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_empty_board_depth_one() {
    let b = Board::new();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let config = config(1, algorithm, EvaluatorKind::Window);
        let col = choose_move(&b, Player::One, &config).unwrap();
        assert!(b.is_legal(col));
    }
}

#[test]
fn test_scenario_completes_own_three() {
    // Player one: 1 2 3 across the bottom, player two stacked on top.
    let mut game = setup_game(&[1, 1, 2, 2, 3, 3]);
    for depth in 1..=4 {
        let col = choose_move(
            game.board(),
            Player::One,
            &config(depth, Algorithm::AlphaBeta, EvaluatorKind::Window),
        )
        .unwrap();
        assert_eq!(col, 3, "depth {depth}");
    }
    let col = choose_move(game.board(), game.to_move(), &EngineConfig::default()).unwrap();
    assert_eq!(game.apply_move(col), Ok(Outcome::Win(Player::One)));
}

#[test]
fn test_scenario_blocks_opponent_three() {
    // Player one builds 1 2 3 on the bottom row while player two plays 7 6.
    let game = setup_game(&[1, 7, 2, 6, 3]);
    assert_eq!(game.to_move(), Player::Two);
    for depth in 2..=4 {
        for evaluator in [EvaluatorKind::Window, EvaluatorKind::Runs] {
            let col = choose_move(
                game.board(),
                Player::Two,
                &config(depth, Algorithm::AlphaBeta, evaluator),
            )
            .unwrap();
            assert_eq!(col, 3, "depth {depth} {evaluator:?}");
        }
    }
}

#[test]
fn test_scenario_full_board_is_draw() {
    let b = board(DRAWN_BOARD);
    assert_eq!(check_outcome(&b), Outcome::Draw);
    assert_eq!(b.legal_columns().count(), 0);
    assert_eq!(
        choose_move(&b, Player::One, &EngineConfig::default()),
        Err(EngineError::GameOver)
    );
}

#[test]
fn test_engine_self_play_reaches_an_outcome() {
    let config = config(3, Algorithm::AlphaBeta, EvaluatorKind::Window);
    let mut game = Game::new();
    while !game.outcome().is_over() {
        let col = choose_move(game.board(), game.to_move(), &config).unwrap();
        game.apply_move(col).unwrap();
    }
    assert!(game.history().len() >= 7);
    assert!(game.history().len() <= ROWS * COLS);
    assert_eq!(check_outcome(game.board()), game.outcome());
}

#[test]
fn test_win_score_reported_for_forced_win() {
    let game = setup_game(&[1, 1, 2, 2, 3, 3]);
    let result = search(
        game.board(),
        Player::One,
        &config(2, Algorithm::Minimax, EvaluatorKind::Runs),
    );
    assert_eq!(result.column, Some(3));
    assert!(result.score > WIN_SCORE);
}
