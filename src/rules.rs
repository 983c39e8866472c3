//! Terminal position detection: four in a row, full board, game outcome.
//!
//! All 69 four-cell windows of the board are enumerated once at compile time.
//! The same table drives win detection here and window scoring in
//! [`crate::eval`].

use crate::board::{Board, Player};
use crate::constants::{COLS, CONNECT, DIRECTIONS, ROWS, WINDOW_COUNT};

/// Four board coordinates `(row, col)` in a straight line.
pub type Window = [(usize, usize); CONNECT];

/// Every window on the board, grouped by direction: horizontal, vertical,
/// diagonal up-right, diagonal down-right.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); CONNECT]; WINDOW_COUNT];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                let last = CONNECT as isize - 1;
                let end_row = row as isize + dr * last;
                let end_col = col as isize + dc * last;
                let row_fits = end_row >= 0 && end_row < ROWS as isize;
                let col_fits = end_col >= 0 && end_col < COLS as isize;
                if row_fits && col_fits {
                    let mut i = 0;
                    while i < CONNECT {
                        let r = row as isize + dr * i as isize;
                        let c = col as isize + dc * i as isize;
                        windows[n][i] = (r as usize, c as usize);
                        i += 1;
                    }
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }
    assert!(n == WINDOW_COUNT);
    windows
}

/// State of a game as seen by a driver after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    /// True once the game is won or drawn.
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// First window (in table order) completely owned by `player`.
pub fn winning_window(board: &Board, player: Player) -> Option<Window> {
    WINDOWS
        .iter()
        .find(|window| window.iter().all(|&(r, c)| board.get(r, c) == Some(player)))
        .copied()
}

/// True if `player` has four pieces in a line in any direction.
#[inline]
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    winning_window(board, player).is_some()
}

/// True if either side has won or no column is playable.
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Player::One)
        || has_four_in_a_row(board, Player::Two)
        || board.is_full()
}

/// Classify a position. Positions where both sides have four in a row
/// cannot arise in play; they report player one.
pub fn check_outcome(board: &Board) -> Outcome {
    if has_four_in_a_row(board, Player::One) {
        Outcome::Win(Player::One)
    } else if has_four_in_a_row(board, Player::Two) {
        Outcome::Win(Player::Two)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
