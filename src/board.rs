//! Connect-Four board: a fixed 6x7 grid with gravity drops.
//!
//! Row 0 is the bottom of the board. Pieces only ever enter a column at its
//! lowest empty row, so a cell above an empty cell is always empty.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CHAR_EMPTY, CHAR_ONE, CHAR_TWO, COLS, ROWS, TOP_ROW};

/// One of the two sides. Player one moves first and plays `X`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Character used for this player's pieces in diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::One => CHAR_ONE,
            Player::Two => CHAR_TWO,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Reasons a piece cannot be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} does not exist", .0 + 1)]
    InvalidColumn(usize),
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),
}

/// Reasons a board diagram cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {0}", expected = ROWS)]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected {expected}", expected = COLS)]
    RowLength { row: usize, len: usize },
    #[error("unexpected character {0:?}")]
    BadCell(char),
    #[error("column {} has a piece above an empty cell", .0 + 1)]
    Floating(usize),
}

/// The 6x7 grid, indexed `[row][col]` with row 0 at the bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Piece at `(row, col)`, with row 0 at the bottom.
    /// Out-of-range coordinates read as empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.cells[row][col]
    }

    /// A column is legal while it exists and its top cell is empty.
    #[inline]
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.cells[TOP_ROW][col].is_none()
    }

    /// Legal columns in increasing order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_legal(col))
    }

    /// True when no column accepts another piece.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_legal(col))
    }

    /// Number of pieces in a column.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .take_while(|&row| self.cells[row][col].is_some())
            .count()
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Drop a piece into `col`, returning the row where it landed.
    ///
    /// The board is left untouched when the move is illegal.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.is_legal(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let row = self.column_height(col);
        self.cells[row][col] = Some(player);
        Ok(row)
    }

    /// Remove the topmost piece of `col`, returning its owner.
    /// Exact inverse of `drop_piece`.
    pub fn lift_piece(&mut self, col: usize) -> Option<Player> {
        let height = self.column_height(col);
        if height == 0 {
            return None;
        }
        self.cells[height - 1][col].take()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let ch = match self.cells[row][col] {
                    Some(player) => player.symbol(),
                    None => CHAR_EMPTY,
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        for col in 1..=COLS {
            if col > 1 {
                write!(f, " ")?;
            }
            write!(f, "{col}")?;
        }
        writeln!(f)
    }
}

/// Parse a diagram in the `Display` format: top row first, rows separated by
/// newlines or `/`. Whitespace inside a row and a trailing line of column
/// numbers are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .split(['\n', '/'])
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty() && !line.chars().all(|c| c.is_ascii_digit()))
            .collect();

        if rows.len() != ROWS {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != COLS {
                return Err(ParseBoardError::RowLength { row: i + 1, len });
            }
            let row = TOP_ROW - i;
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch.to_ascii_uppercase() {
                    CHAR_ONE => Some(Player::One),
                    CHAR_TWO => Some(Player::Two),
                    CHAR_EMPTY => None,
                    _ => return Err(ParseBoardError::BadCell(ch)),
                };
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if board.cells[row][col].is_some() && board.cells[row - 1][col].is_none() {
                    return Err(ParseBoardError::Floating(col));
                }
            }
        }

        Ok(board)
    }
}
