//! Constants for board geometry, search parameters, and heuristic weights.
//!
//! The board is a fixed 6x7 grid. Rows are numbered from the bottom (row 0)
//! upwards, so a piece dropped into an empty column lands in row 0 and the
//! top of every column is row `ROWS - 1`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Index of the top row. A column is playable while this cell is empty.
pub const TOP_ROW: usize = ROWS - 1;

/// Number of pieces that must line up to win.
pub const CONNECT: usize = 4;

/// Number of distinct four-cell windows on the board
/// (24 horizontal, 21 vertical, 12 per diagonal direction).
pub const WINDOW_COUNT: usize = ROWS * (COLS - CONNECT + 1)
    + COLS * (ROWS - CONNECT + 1)
    + 2 * (ROWS - CONNECT + 1) * (COLS - CONNECT + 1);

/// Line directions as (row delta, column delta).
/// Order: horizontal, vertical, diagonal up-right, diagonal down-right.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const SEARCH_DEPTH: u32 = 4;

/// Deepest search the engine accepts. Plain minimax visits up to 7^depth
/// leaves, so only alpha-beta stays usable near this limit.
pub const MAX_DEPTH: u32 = 10;

/// Score of a won position. Exceeds any heuristic score by many orders of
/// magnitude; the remaining depth is added so that faster wins rank higher.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Score of a drawn (full) board.
pub const DRAW_SCORE: i64 = 0;

// =============================================================================
// Window Heuristic Weights
// =============================================================================

/// Window holding four of the evaluating player's pieces.
pub const WINDOW_FOUR: i64 = 100;

/// Window holding three of the evaluating player's pieces and one empty cell.
pub const WINDOW_THREE: i64 = 5;

/// Window holding two of the evaluating player's pieces and two empty cells.
pub const WINDOW_TWO: i64 = 2;

/// Window holding three opponent pieces and one empty cell (subtracted).
pub const WINDOW_OPP_THREE: i64 = 4;

// =============================================================================
// Run Heuristic Weights
// =============================================================================

/// Weight of a run of four consecutive pieces.
pub const RUN_FOUR: i64 = 10;

/// Weight of a run of three consecutive pieces.
pub const RUN_THREE: i64 = 5;

/// Weight of a run of two consecutive pieces.
pub const RUN_TWO: i64 = 2;

// =============================================================================
// Text Representation
// =============================================================================

/// Character for a player one piece in board diagrams.
pub const CHAR_ONE: char = 'X';

/// Character for a player two piece in board diagrams.
pub const CHAR_TWO: char = 'O';

/// Character for an empty cell in board diagrams.
pub const CHAR_EMPTY: char = '.';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count() {
        assert_eq!(WINDOW_COUNT, 69);
    }

    #[test]
    fn test_win_score_dominates_heuristics() {
        // Every window scoring the maximum still falls far short of a win.
        let max_window = WINDOW_FOUR * WINDOW_COUNT as i64;
        assert!(WIN_SCORE > max_window * 1_000_000);
    }
}
