//! Computer opponent.
//!
//! Not a search: level 1 plays a random legal move, level 2 scores every
//! legal move with a few cheap heuristics and picks randomly among the
//! near-best. Uses only the engine's public query surface.

use std::cmp::Ordering;

use rand::seq::IndexedRandom;
use rand::Rng;
use rchess::{Game, Move, Piece, PieceKind, Position};

const PROMOTION_BONUS: f64 = 9000.0;
const MAX_CANDIDATES: usize = 8;
const CANDIDATE_WINDOW: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Random,
    Greedy,
}

impl Level {
    pub fn from_number(n: u8) -> Self {
        if n == 2 {
            Level::Greedy
        } else {
            Level::Random
        }
    }
}

/// Pick a move for the side to move, or `None` when it has none.
/// Promotions are always to a queen.
pub fn choose_move<R: Rng>(game: &Game, level: Level, rng: &mut R) -> Option<Move> {
    let moves = candidate_moves(game);
    match level {
        Level::Random => moves.choose(rng).copied(),
        Level::Greedy => pick_greedy(game, &moves, rng),
    }
}

fn candidate_moves(game: &Game) -> Vec<Move> {
    let side = game.side_to_move();
    let mut moves = Vec::new();
    for (from, piece) in game.board().pieces() {
        if piece.color != side {
            continue;
        }
        for to in game.legal_moves_from(from) {
            let mv = Move::new(from, to);
            if game.is_promotion(from, to) {
                moves.push(mv.with_promotion(PieceKind::Queen));
            } else {
                moves.push(mv);
            }
        }
    }
    moves
}

fn pick_greedy<R: Rng>(game: &Game, moves: &[Move], rng: &mut R) -> Option<Move> {
    let mut scored: Vec<(Move, f64)> = moves
        .iter()
        .map(|&mv| (mv, score(game, mv) + rng.random::<f64>() * 5.0))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let best = scored.first()?.1;
    let top: Vec<Move> = scored
        .iter()
        .take(MAX_CANDIDATES)
        .take_while(|(_, s)| *s >= best - CANDIDATE_WINDOW)
        .map(|(mv, _)| *mv)
        .collect();
    top.choose(rng).copied()
}

fn score(game: &Game, mv: Move) -> f64 {
    let mut s = 0.0;
    if let Some(captured) = game.board().get(mv.to) {
        s += piece_value(captured) as f64 * 2.0;
    }
    if game.is_promotion(mv.from, mv.to) {
        s += PROMOTION_BONUS;
    }
    s += center_bonus(mv.to) as f64 * 10.0;
    s += game.legal_moves_from(mv.from).len() as f64 * 3.0;
    s
}

pub fn piece_value(piece: Piece) -> u32 {
    match piece.kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight | PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 10_000,
    }
}

/// 15 on d4/e4/d5/e5, 5 on the ring around them.
pub fn center_bonus(pos: Position) -> u32 {
    let (r, c) = (pos.row(), pos.col());
    if (3..=4).contains(&r) && (3..=4).contains(&c) {
        15
    } else if (2..=5).contains(&r) && (2..=5).contains(&c) {
        5
    } else {
        0
    }
}
