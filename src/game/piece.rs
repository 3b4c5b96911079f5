//! Pieces and their pseudo-legal movement.
//!
//! Generation here respects board edges, blocking and captures, but never
//! asks whether the mover's own king ends up attacked. That filter lives in
//! [`super::rules`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// Row delta of a pawn step.
    #[inline]
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for this color's pawns.
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::symbol`].
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may become on the last rank.
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A piece is plain data: moving one replaces the occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        self.kind.symbol()
    }

    /// Destinations reachable from `from` under this piece's movement rule.
    pub fn pseudo_legal_moves(self, board: &Board, from: Position) -> Vec<Position> {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board, from),
            PieceKind::Knight => self.step_moves(board, from, &KNIGHT_DELTAS),
            PieceKind::Bishop => self.slide_moves(board, from, &BISHOP_DIRS),
            PieceKind::Rook => self.slide_moves(board, from, &ROOK_DIRS),
            PieceKind::Queen => self.slide_moves(board, from, &QUEEN_DIRS),
            // King steps are the queen directions taken once.
            PieceKind::King => self.step_moves(board, from, &QUEEN_DIRS),
        }
    }

    fn pawn_moves(self, board: &Board, from: Position) -> Vec<Position> {
        let dir = self.color.forward();
        let mut out = Vec::with_capacity(4);

        if let Some(one) = from.offset(dir, 0) {
            if board.get(one).is_none() {
                out.push(one);
                if from.row() == self.color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if board.get(two).is_none() {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                if matches!(board.get(diag), Some(p) if p.color != self.color) {
                    out.push(diag);
                }
            }
        }

        out
    }

    fn step_moves(self, board: &Board, from: Position, deltas: &[(i8, i8)]) -> Vec<Position> {
        deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| !matches!(board.get(to), Some(p) if p.color == self.color))
            .collect()
    }

    fn slide_moves(self, board: &Board, from: Position, dirs: &[(i8, i8)]) -> Vec<Position> {
        let mut out = Vec::new();
        for &(dr, dc) in dirs {
            let mut cur = from;
            while let Some(next) = cur.offset(dr, dc) {
                match board.get(next) {
                    None => out.push(next),
                    Some(p) => {
                        if p.color != self.color {
                            out.push(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
        out
    }
}

/// FEN letter: upper case for white, lower case for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::White => self.symbol(),
            Color::Black => self.symbol().to_ascii_lowercase(),
        };
        write!(f, "{}", c)
    }
}
