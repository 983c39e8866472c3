//! Static position evaluation used at the search cutoff.
//!
//! Two heuristics are provided behind the [`Evaluator`] trait:
//! - [`WindowEvaluator`] scores every four-cell window by how many pieces of
//!   each side it holds (the default).
//! - [`RunEvaluator`] counts runs of two, three and four consecutive pieces for
//!   both sides and takes the weighted difference.
//!
//! Scores are from the perspective of the player passed in: positive values
//! favor that player.

use crate::board::{Board, Player};
use crate::constants::{
    COLS, DIRECTIONS, ROWS, RUN_FOUR, RUN_THREE, RUN_TWO, WINDOW_FOUR, WINDOW_OPP_THREE,
    WINDOW_THREE, WINDOW_TWO,
};
use crate::rules::{Window, WINDOWS};

/// A pure scoring function of board contents and perspective.
pub trait Evaluator {
    /// Score `board` for `perspective`. Must not depend on anything but its
    /// arguments.
    fn evaluate(&self, board: &Board, perspective: Player) -> i64;
}

/// Which heuristic the engine uses, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EvaluatorKind {
    /// Score four-cell windows
    #[default]
    Window,
    /// Count runs of consecutive pieces
    Runs,
}

impl Evaluator for EvaluatorKind {
    fn evaluate(&self, board: &Board, perspective: Player) -> i64 {
        match self {
            EvaluatorKind::Window => WindowEvaluator.evaluate(board, perspective),
            EvaluatorKind::Runs => RunEvaluator.evaluate(board, perspective),
        }
    }
}

// =============================================================================
// Window heuristic
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvaluator;

impl Evaluator for WindowEvaluator {
    fn evaluate(&self, board: &Board, perspective: Player) -> i64 {
        WINDOWS
            .iter()
            .map(|window| score_window(board, window, perspective))
            .sum()
    }
}

/// Score one window for `player`.
///
/// The player's own pieces are scored by the best matching tier only; an
/// opponent three with an open cell is penalized on top of that.
fn score_window(board: &Board, window: &Window, player: Player) -> i64 {
    let opponent = player.opponent();
    let mut own = 0;
    let mut theirs = 0;
    let mut empty = 0;
    for &(r, c) in window {
        match board.get(r, c) {
            Some(p) if p == player => own += 1,
            Some(p) if p == opponent => theirs += 1,
            _ => empty += 1,
        }
    }

    let mut score = match (own, empty) {
        (4, _) => WINDOW_FOUR,
        (3, 1) => WINDOW_THREE,
        (2, 2) => WINDOW_TWO,
        _ => 0,
    };
    if theirs == 3 && empty == 1 {
        score -= WINDOW_OPP_THREE;
    }
    score
}

// =============================================================================
// Run heuristic
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct RunEvaluator;

impl Evaluator for RunEvaluator {
    fn evaluate(&self, board: &Board, perspective: Player) -> i64 {
        run_score(board, perspective) - run_score(board, perspective.opponent())
    }
}

fn run_score(board: &Board, player: Player) -> i64 {
    count_runs(board, player, 4) * RUN_FOUR
        + count_runs(board, player, 3) * RUN_THREE
        + count_runs(board, player, 2) * RUN_TWO
}

/// Count (cell, direction) pairs where `len` consecutive cells starting at
/// the cell all belong to `player`. A longer line contributes one run per
/// starting offset, e.g. a line of four holds three runs of two.
pub fn count_runs(board: &Board, player: Player, len: usize) -> i64 {
    let mut count = 0;
    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != Some(player) {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                if run_from(board, player, row, col, dr, dc, len) {
                    count += 1;
                }
            }
        }
    }
    count
}

fn run_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    len: usize,
) -> bool {
    (0..len as isize).all(|i| {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        r >= 0 && c >= 0 && board.get(r as usize, c as usize) == Some(player)
    })
}
