//! Attack detection and legality filtering.
//!
//! Every function here works on a [`Board`] snapshot and never mutates the
//! caller's board: candidate moves are tried on a clone that is dropped
//! afterwards.

use log::trace;

use super::board::Board;
use super::piece::{Color, Piece, PieceKind};
use super::position::Position;

/// True iff any `by` piece has `target` among its pseudo-legal destinations.
///
/// Attackers are not filtered for their own legality: a pinned piece still
/// gives check.
pub fn is_attacked(board: &Board, target: Position, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(from, p)| p.pseudo_legal_moves(board, from).contains(&target))
}

/// True iff `color`'s king is attacked. A board without that king is never
/// in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_position(color) {
        Some(king) => is_attacked(board, king, color.opponent()),
        None => false,
    }
}

/// Relocate the piece on `from` to `to`, promoting it if given a kind, and
/// return whatever stood on `to`. No rule checks.
pub fn apply_move(
    board: &mut Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Option<Piece> {
    let moving = board.take(from);
    let placed = match (moving, promotion) {
        (Some(piece), Some(kind)) => Some(Piece::new(kind, piece.color)),
        (piece, _) => piece,
    };
    let captured = board.get(to);
    board.set(to, placed);
    captured
}

/// Legal destinations of the `side` piece on `from`: its pseudo-legal moves
/// minus those that leave `side`'s king attacked. Empty when `from` is empty
/// or holds an opponent's piece.
pub fn legal_destinations(board: &Board, from: Position, side: Color) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    if piece.color != side {
        return Vec::new();
    }

    piece
        .pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|&to| {
            let mut scratch = board.clone();
            apply_move(&mut scratch, from, to, None);
            let safe = !in_check(&scratch, side);
            if !safe {
                trace!("{} {}{} rejected: king left attacked", side, from, to);
            }
            safe
        })
        .collect()
}

/// True iff `color` has at least one legal move anywhere on the board.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(from, _)| !legal_destinations(board, from, color).is_empty())
}
