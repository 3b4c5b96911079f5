// Representation of a chess board: an 8x8 array of optional pieces.
// Pure storage, no rule knowledge.

use super::error::{ChessError, ChessResult};
use super::piece::{Color, Piece, PieceKind};
use super::position::{Position, BOARD_SIZE};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_to_standard_start();
        board
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Clear every square and place the 32 opening pieces.
    pub fn reset_to_standard_start(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(kind, Color::Black));
            self.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            self.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            self.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
    }

    /// Return the piece at a given square. Returns None if empty.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row()][pos.col()] = piece;
    }

    /// Empty the square and return what was on it.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()].take()
    }

    /// Occupied squares, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(pos, _)| pos)
    }

    /// Parse the piece-placement field of a FEN record, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`. Anything after the
    /// first space is ignored.
    pub fn from_placement(fen: &str) -> ChessResult<Self> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let kind = PieceKind::from_symbol(c).ok_or_else(|| {
                        ChessError::InvalidPlacement(format!("unknown piece `{}`", c))
                    })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let pos = Position::new(row, col).map_err(|_| {
                        ChessError::InvalidPlacement(format!("rank `{}` is too long", rank))
                    })?;
                    board.set(pos, Some(Piece::new(kind, color)));
                    col += 1;
                }
            }
            if col != BOARD_SIZE {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank `{}` covers {} files",
                    rank, col
                )));
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for (row, rank) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for sq in rank {
                match sq {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push_str(&p.to_string());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}
