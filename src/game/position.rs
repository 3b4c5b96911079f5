use std::fmt;
use std::str::FromStr;

use super::error::{ChessError, ChessResult};

pub const BOARD_SIZE: usize = 8;

/// A square on the board.
///
/// Row 0 is the eighth rank (black's back rank) and column 0 is the a-file,
/// so `e2` is row 6, column 4. A `Position` is always on the board: the only
/// way to build one from raw coordinates is [`Position::new`], which rejects
/// anything outside `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: usize, col: usize) -> ChessResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::InvalidSquare { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Rank number as printed on a board, 1..=8.
    #[inline]
    pub const fn rank(self) -> u8 {
        BOARD_SIZE as u8 - self.row
    }

    #[inline]
    pub const fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// The square `dr` rows and `dc` columns away, or `None` past the edge.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        let range = 0..BOARD_SIZE as i8;
        if range.contains(&row) && range.contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        // '8' -> row 0, '1' -> row 7
        Position::new((b'8' - rank) as usize, (file - b'a') as usize)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = ChessError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}
