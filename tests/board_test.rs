use rchess::game::board::Board;
use rchess::game::piece::{Color, Piece, PieceKind};
use rchess::game::position::Position;
use rchess::ChessError;

fn sq(name: &str) -> Position {
    name.parse().unwrap()
}

#[test]
fn test_initial_king_position() {
    let board = Board::new();
    assert_eq!(board.get(sq("e1")), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(board.get(sq("e8")), Some(Piece::new(PieceKind::King, Color::Black)));
    assert_eq!(board.king_position(Color::White), Some(sq("e1")));
}

#[test]
fn test_initial_pawn_positions() {
    let board = Board::new();
    for col in 0..8 {
        let white = Position::new(6, col).unwrap();
        let black = Position::new(1, col).unwrap();
        assert_eq!(board.get(white), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.get(black), Some(Piece::new(PieceKind::Pawn, Color::Black)));
    }
    assert_eq!(board.pieces().count(), 32);
}

#[test]
fn test_reset_clears_other_squares() {
    let mut board = Board::from_placement("8/8/8/3q4/8/8/8/8").unwrap();
    board.reset_to_standard_start();
    assert_eq!(board.get(sq("d5")), None);
    assert_eq!(board, Board::new());
    assert_eq!(board.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
}

#[test]
fn test_set_and_take_are_plain_storage() {
    let mut board = Board::empty();
    let queen = Piece::new(PieceKind::Queen, Color::Black);
    board.set(sq("a1"), Some(queen));
    assert_eq!(board.get(sq("a1")), Some(queen));
    assert_eq!(board.take(sq("a1")), Some(queen));
    assert_eq!(board.get(sq("a1")), None);
    assert_eq!(board, Board::default());
}

#[test]
fn test_placement_errors() {
    for bad in ["8/8/8", "9/8/8/8/8/8/8/8", "7x/8/8/8/8/8/8/8", "ppppppppp/8/8/8/8/8/8/8"] {
        assert!(
            matches!(Board::from_placement(bad), Err(ChessError::InvalidPlacement(_))),
            "{bad} should be rejected"
        );
    }
}
