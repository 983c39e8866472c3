//! The live game: board, side to move, history and outcome.
//!
//! Drivers own one `Game` per match and mutate it only through
//! [`Game::apply_move`] and [`Game::undo`]. Player one always moves first.

use crate::board::{Board, MoveError, Player};
use crate::rules::{Outcome, check_outcome, has_four_in_a_row};

/// Reasons a move or a position is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("{one} pieces for player 1 and {two} for player 2 cannot arise in play")]
    PieceCounts { one: usize, two: usize },
    #[error("both players have four in a row")]
    TwoWinners,
}

/// A game in progress: the board plus whose turn it is and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<usize>,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game on an empty board with player one to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            history: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    /// Resume from a position given as a bare board. The side to move is
    /// inferred from the piece counts: player one moves whenever both sides
    /// have the same number of pieces.
    ///
    /// Player one must have as many pieces as player two or one more, and at
    /// most one side may have four in a row.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        let one = board.count(Player::One);
        let two = board.count(Player::Two);
        let to_move = match one.checked_sub(two) {
            Some(0) => Player::One,
            Some(1) => Player::Two,
            _ => return Err(GameError::PieceCounts { one, two }),
        };
        if has_four_in_a_row(&board, Player::One) && has_four_in_a_row(&board, Player::Two) {
            return Err(GameError::TwoWinners);
        }
        Ok(Self {
            board,
            to_move,
            history: Vec::new(),
            outcome: check_outcome(&board),
        })
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose piece the next move drops.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome after the last move, cached.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Columns played since the game (or position) started.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Drop a piece for the side to move and hand the turn over.
    /// Nothing changes if the game is over or the column is illegal.
    pub fn apply_move(&mut self, col: usize) -> Result<Outcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        apply_move(&mut self.board, col, self.to_move)?;
        self.history.push(col);
        self.outcome = check_outcome(&self.board);
        self.to_move = self.to_move.opponent();
        Ok(self.outcome)
    }

    /// Take back the last move, returning its column.
    pub fn undo(&mut self) -> Option<usize> {
        let col = self.history.pop()?;
        self.board.lift_piece(col);
        self.to_move = self.to_move.opponent();
        self.outcome = check_outcome(&self.board);
        Some(col)
    }
}

/// Drop `player`'s piece into `col` of a bare board, returning the row.
pub fn apply_move(board: &mut Board, col: usize, player: Player) -> Result<usize, MoveError> {
    board.drop_piece(col, player)
}
