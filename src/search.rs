//! Fixed-depth minimax search, with and without alpha-beta pruning.
//!
//! The search explores every legal column in increasing order, copying the
//! board before each hypothetical move. Leaves are scored from the
//! perspective of the maximizing player (the side the engine plays for):
//! - a win for the maximizer scores `WIN_SCORE + remaining depth`,
//! - a win for the opponent scores the negation of that,
//! - a full board scores `DRAW_SCORE`,
//! - a depth cutoff scores the configured heuristic for the maximizer.
//!
//! Ties keep the lowest column, so results are reproducible. Alpha-beta
//! pruning never changes the chosen column or its score, only the number of
//! nodes visited.
//!
//! ## Example
//!
//! ```
//! use minimax_four::board::{Board, Player};
//! use minimax_four::config::EngineConfig;
//! use minimax_four::search::choose_move;
//!
//! let board = Board::new();
//! let column = choose_move(&board, Player::One, &EngineConfig::default()).unwrap();
//! assert!(board.is_legal(column));
//! ```

use log::debug;

use crate::board::{Board, Player};
use crate::config::EngineConfig;
use crate::constants::{DRAW_SCORE, WIN_SCORE};
use crate::eval::Evaluator;
use crate::rules::{has_four_in_a_row, is_terminal};

/// Search variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Plain minimax, explores every branch
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    #[value(name = "alphabeta")]
    AlphaBeta,
}

/// Why the engine cannot pick a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("the game is already over")]
    GameOver,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including leaves
    pub nodes: u64,
    /// Positions scored without expansion (terminal or depth cutoff)
    pub leaves: u64,
    /// Times the remaining columns of a node were skipped by pruning
    pub cutoffs: u64,
}

/// Outcome of a search from the root position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column, `None` if the root was terminal
    pub column: Option<usize>,
    /// Score of the best column from the maximizer's perspective
    pub score: i64,
    pub stats: SearchStats,
}

/// Recursive search state for one root position.
pub struct Searcher<E> {
    evaluator: E,
    maximizer: Player,
    stats: SearchStats,
}

impl<E: Evaluator> Searcher<E> {
    /// Create a searcher scoring leaves for `maximizer`.
    pub fn new(evaluator: E, maximizer: Player) -> Self {
        Self {
            evaluator,
            maximizer,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated since the searcher was created.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        }
    }

    /// Score a leaf, or `None` if the node must be expanded.
    fn leaf_score(&mut self, board: &Board, depth: u32) -> Option<i64> {
        let bonus = i64::from(depth);
        let score = if has_four_in_a_row(board, self.maximizer) {
            WIN_SCORE + bonus
        } else if has_four_in_a_row(board, self.maximizer.opponent()) {
            -(WIN_SCORE + bonus)
        } else if board.is_full() {
            DRAW_SCORE
        } else if depth == 0 {
            self.evaluator.evaluate(board, self.maximizer)
        } else {
            return None;
        };
        self.stats.leaves += 1;
        Some(score)
    }

    /// Plain minimax. Returns the best column (if the node was expanded)
    /// and its score.
    pub fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> (Option<usize>, i64) {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf_score(board, depth) {
            return (None, score);
        }

        let player = self.mover(maximizing);
        let mut best: Option<(usize, i64)> = None;
        for col in board.legal_columns() {
            let child = play(board, col, player);
            let (_, score) = self.minimax(&child, depth - 1, !maximizing);
            if improves(best, score, maximizing) {
                best = Some((col, score));
            }
        }

        expanded(best)
    }

    /// Minimax with alpha-beta pruning over the window `(alpha, beta)`.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf_score(board, depth) {
            return (None, score);
        }

        let player = self.mover(maximizing);
        let mut best: Option<(usize, i64)> = None;
        for col in board.legal_columns() {
            let child = play(board, col, player);
            let (_, score) = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);
            if improves(best, score, maximizing) {
                best = Some((col, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        expanded(best)
    }
}

/// Copy `board` and drop `player`'s piece into a column known to be legal.
fn play(board: &Board, col: usize, player: Player) -> Board {
    let mut child = *board;
    if let Err(err) = child.drop_piece(col, player) {
        unreachable!("search tried an illegal move: {err}");
    }
    child
}

/// Strict comparison so that the first (lowest) column wins ties.
#[inline]
fn improves(best: Option<(usize, i64)>, score: i64, maximizing: bool) -> bool {
    match best {
        None => true,
        Some((_, best)) if maximizing => score > best,
        Some((_, best)) => score < best,
    }
}

fn expanded(best: Option<(usize, i64)>) -> (Option<usize>, i64) {
    match best {
        Some((col, score)) => (Some(col), score),
        None => panic!("non-terminal position has no legal column"),
    }
}

/// Run the configured search for `maximizer` from `board`.
pub fn search(board: &Board, maximizer: Player, config: &EngineConfig) -> SearchResult {
    let mut searcher = Searcher::new(config.evaluator(), maximizer);
    let (column, score) = match config.algorithm() {
        Algorithm::Minimax => searcher.minimax(board, config.depth(), true),
        Algorithm::AlphaBeta => {
            searcher.alpha_beta(board, config.depth(), i64::MIN, i64::MAX, true)
        }
    };
    let stats = searcher.stats();
    debug!(
        "{:?} depth {} for {}: column {:?} score {} ({} nodes, {} leaves, {} cutoffs)",
        config.algorithm(),
        config.depth(),
        maximizer,
        column.map(|c| c + 1),
        score,
        stats.nodes,
        stats.leaves,
        stats.cutoffs
    );
    SearchResult {
        column,
        score,
        stats,
    }
}

/// Pick the column `player` should play. Fails only when the position is
/// already decided.
pub fn choose_move(
    board: &Board,
    player: Player,
    config: &EngineConfig,
) -> Result<usize, EngineError> {
    if is_terminal(board) {
        return Err(EngineError::GameOver);
    }
    // The depth is at least one, so an ongoing root is always expanded.
    match search(board, player, config).column {
        Some(col) => Ok(col),
        None => unreachable!("search did not expand an ongoing root"),
    }
}

/// Exact score of every legal column for `player`, searched to the
/// configured depth. Used for analysis output.
pub fn root_scores(board: &Board, player: Player, config: &EngineConfig) -> Vec<(usize, i64)> {
    if is_terminal(board) {
        return Vec::new();
    }
    let mut searcher = Searcher::new(config.evaluator(), player);
    let depth = config.depth().saturating_sub(1);
    board
        .legal_columns()
        .map(|col| {
            let child = play(board, col, player);
            let (_, score) = match config.algorithm() {
                Algorithm::Minimax => searcher.minimax(&child, depth, false),
                Algorithm::AlphaBeta => {
                    searcher.alpha_beta(&child, depth, i64::MIN, i64::MAX, false)
                }
            };
            (col, score)
        })
        .collect()
}
