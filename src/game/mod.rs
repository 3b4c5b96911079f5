pub mod board;
pub mod error;
pub mod mv;
pub mod piece;
pub mod position;
pub mod rules;
pub mod state;

pub use board::Board;
pub use error::{ChessError, ChessResult};
pub use mv::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
pub use state::{Game, GameStatus};
