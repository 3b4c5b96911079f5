//! Game orchestration: turn order, legality, move application, history and
//! terminal-state detection.

use log::{debug, info};

use super::board::Board;
use super::error::{ChessError, ChessResult};
use super::mv::Move;
use super::piece::{Color, Piece, PieceKind};
use super::position::Position;
use super::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// A single game. Owns its board; the only way to change the board is
/// [`Game::new_game`] or [`Game::make_move`].
///
/// Not synchronised: callers sharing a `Game` across threads must serialise
/// mutation themselves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<String>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty, not yet started game. Call [`Game::new_game`] to set up
    /// the pieces.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            history: Vec::new(),
            status: GameStatus::NotStarted,
        }
    }

    /// A game in progress from an arbitrary position, with an empty history.
    /// The status is computed immediately, so a position with no moves for
    /// `side_to_move` starts out as checkmate or stalemate.
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        let status = Self::evaluate(&board, side_to_move);
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            status,
        }
    }

    /// Reset to the standard start with white to move. Callable in any state.
    pub fn new_game(&mut self) {
        self.board.reset_to_standard_start();
        self.side_to_move = Color::White;
        self.history.clear();
        self.status = GameStatus::InProgress;
        info!("new game started");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move.is_white()
    }

    /// Legal destinations of the piece on `from`. Empty when the square is
    /// empty, holds the side not to move, or the game is not in progress.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        rules::legal_destinations(&self.board, from, self.side_to_move)
    }

    /// True iff the piece on `from` is a pawn and `to` is on its last rank.
    pub fn is_promotion(&self, from: Position, to: Position) -> bool {
        match self.board.get(from) {
            Some(Piece {
                kind: PieceKind::Pawn,
                color,
            }) => to.row() == color.promotion_row(),
            _ => false,
        }
    }

    pub fn in_check(&self, color: Color) -> bool {
        rules::in_check(&self.board, color)
    }

    /// True iff the side to move has no legal move.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn apply(&mut self, mv: Move) -> ChessResult<String> {
        self.make_move(mv.from, mv.to, mv.promotion)
    }

    /// Play `from` to `to` for the side to move and return the notation
    /// appended to the history.
    ///
    /// A pawn reaching its last rank becomes `promotion`, or a queen when
    /// none is given. Fails with [`ChessError::IllegalMove`] and leaves the
    /// game untouched when `to` is not a legal destination of `from` or the
    /// promotion kind is a pawn or king.
    pub fn make_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> ChessResult<String> {
        let illegal = ChessError::IllegalMove { from, to };
        if !self.legal_moves_from(from).contains(&to) {
            return Err(illegal);
        }
        let Some(piece) = self.board.get(from) else {
            return Err(illegal);
        };

        let promotion = if self.is_promotion(from, to) {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotion_target() {
                return Err(illegal);
            }
            Some(kind)
        } else {
            None
        };

        // Everything is computed on the scratch board and committed at once.
        let mut next = self.board.clone();
        let captured = rules::apply_move(&mut next, from, to, promotion);
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let status = Self::evaluate(&next, opponent);
        let notation = notation(
            piece,
            from,
            to,
            captured.is_some(),
            promotion,
            rules::in_check(&next, opponent),
            status.is_terminal(),
        );

        self.board = next;
        self.side_to_move = opponent;
        self.history.push(notation.clone());
        self.status = status;

        debug!("{} played {}", mover, notation);
        match status {
            GameStatus::Checkmate { winner } => info!("checkmate, {} wins", winner),
            GameStatus::Stalemate => info!("stalemate"),
            _ => {}
        }
        Ok(notation)
    }

    fn evaluate(board: &Board, side_to_move: Color) -> GameStatus {
        if rules::has_legal_move(board, side_to_move) {
            GameStatus::InProgress
        } else if rules::in_check(board, side_to_move) {
            GameStatus::Checkmate {
                winner: side_to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

/// `[piece letter]from(-|x)to[=kind][+|#]`, pawns without a letter.
fn notation(
    piece: Piece,
    from: Position,
    to: Position,
    capture: bool,
    promotion: Option<PieceKind>,
    check: bool,
    game_over: bool,
) -> String {
    let mut out = String::with_capacity(10);
    if piece.kind != PieceKind::Pawn {
        out.push(piece.symbol());
    }
    out.push_str(&from.to_string());
    out.push(if capture { 'x' } else { '-' });
    out.push_str(&to.to_string());
    if let Some(kind) = promotion {
        out.push('=');
        out.push(kind.symbol());
    }
    if check {
        out.push(if game_over { '#' } else { '+' });
    }
    out
}
