//! Two-player chess rules engine.
//!
//! [`game::Game`] owns the board, generates legal moves (pseudo-legal
//! generation filtered by king safety), applies moves including promotion,
//! keeps the move history and detects checkmate and stalemate.
//! [`ui::renderer`] turns a board and a history into text for a front-end.

pub mod game;
pub mod ui;

pub use game::{
    Board, ChessError, ChessResult, Color, Game, GameStatus, Move, Piece, PieceKind, Position,
};
