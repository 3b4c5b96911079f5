use rchess::game::rules;
use rchess::{Board, ChessError, Color, Game, GameStatus, Move, Piece, PieceKind, Position};

fn sq(name: &str) -> Position {
    name.parse().unwrap()
}

fn started() -> Game {
    let mut game = Game::new();
    game.new_game();
    game
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv: Move = text.parse().unwrap();
        game.apply(mv).unwrap_or_else(|e| panic!("{text}: {e}"));
    }
}

fn all_legal(game: &Game) -> Vec<Move> {
    game.board()
        .pieces()
        .filter(|(_, p)| p.color == game.side_to_move())
        .flat_map(|(from, _)| {
            game.legal_moves_from(from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

#[test]
fn opening_destination_counts() {
    let game = started();
    for col in 0..8 {
        let pawn = Position::new(6, col).unwrap();
        assert_eq!(game.legal_moves_from(pawn).len(), 2, "pawn on {pawn}");
    }
    let mut knight = game.legal_moves_from(sq("g1"));
    knight.sort();
    assert_eq!(knight, vec![sq("f3"), sq("h3")]);
    assert_eq!(game.legal_moves_from(sq("b1")).len(), 2);
    for name in ["a1", "c1", "d1", "e1", "f1", "h1"] {
        assert!(game.legal_moves_from(sq(name)).is_empty(), "{name}");
    }
    assert_eq!(all_legal(&game).len(), 20);
    // Black pieces are not movable on white's turn.
    assert!(game.legal_moves_from(sq("e7")).is_empty());
}

#[test]
fn not_started_game_has_no_moves() {
    let mut game = Game::new();
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert!(!game.is_game_over());
    assert!(game.legal_moves_from(sq("e2")).is_empty());
    assert!(game.make_move(sq("e2"), sq("e4"), None).is_err());
}

#[test]
fn new_game_is_idempotent() {
    let mut game = started();
    play(&mut game, &["e2e4", "e7e5"]);
    game.new_game();
    let first = game.board().clone();
    assert!(game.history().is_empty());
    game.new_game();
    assert_eq!(game.board(), &first);
    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
    assert!(game.white_to_move());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn turn_alternates_only_on_success() {
    let mut game = started();
    assert!(game.white_to_move());
    game.make_move(sq("e2"), sq("e4"), None).unwrap();
    assert!(!game.white_to_move());
    assert!(game.make_move(sq("d2"), sq("d4"), None).is_err());
    assert!(!game.white_to_move());
    game.make_move(sq("e7"), sq("e5"), None).unwrap();
    assert!(game.white_to_move());
}

#[test]
fn illegal_move_leaves_state_unchanged() {
    let mut game = started();
    play(&mut game, &["e2e4"]);
    let board = game.board().clone();
    let history = game.history().to_vec();

    let err = game.make_move(sq("e7"), sq("e4"), None).unwrap_err();
    assert_eq!(err, ChessError::IllegalMove { from: sq("e7"), to: sq("e4") });
    assert!(game.make_move(sq("d4"), sq("d5"), None).is_err());
    assert!(game.make_move(sq("e4"), sq("e5"), None).is_err());

    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), history.as_slice());
    assert!(!game.white_to_move());
}

#[test]
fn fools_mate() {
    let mut game = started();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.is_game_over());
    assert!(game.in_check(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::Black });
    assert_eq!(game.history(), ["f2-f3", "e7-e5", "g2-g4", "Qd8-h4#"]);
    assert!(game.legal_moves_from(sq("e1")).is_empty());
    assert!(game.make_move(sq("a2"), sq("a3"), None).is_err());
}

#[test]
fn stalemate_is_not_check() {
    let board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
    let game = Game::from_position(board, Color::Black);
    assert!(game.is_game_over());
    assert!(!game.in_check(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn move_into_stalemate_is_reported() {
    let board = Board::from_placement("7k/8/5Q2/6K1/8/8/8/8").unwrap();
    let mut game = Game::from_position(board, Color::White);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.make_move(sq("f6"), sq("f7"), None).unwrap(), "Qf6-f7");
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn promotion_defaults_to_queen() {
    let board = Board::from_placement("4k3/P7/8/8/8/8/8/4K3").unwrap();
    let mut game = Game::from_position(board, Color::White);
    assert!(game.is_promotion(sq("a7"), sq("a8")));
    assert!(!game.is_promotion(sq("e1"), sq("e2")));
    let notation = game.make_move(sq("a7"), sq("a8"), None).unwrap();
    assert_eq!(notation, "a7-a8=Q+");
    assert_eq!(game.board().get(sq("a8")), Some(Piece::new(PieceKind::Queen, Color::White)));
    assert_eq!(game.board().get(sq("a7")), None);
    assert!(game.in_check(Color::Black));
}

#[test]
fn underpromotion_and_bad_promotion_kinds() {
    let board = Board::from_placement("4k3/P7/8/8/8/8/8/4K3").unwrap();
    let mut game = Game::from_position(board.clone(), Color::White);
    for kind in [PieceKind::King, PieceKind::Pawn] {
        assert!(game.make_move(sq("a7"), sq("a8"), Some(kind)).is_err());
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.make_move(sq("a7"), sq("a8"), Some(PieceKind::Knight)).unwrap(), "a7-a8=N");
    assert_eq!(game.board().get(sq("a8")), Some(Piece::new(PieceKind::Knight, Color::White)));
}

#[test]
fn black_promotes_on_first_rank() {
    let board = Board::from_placement("4k3/8/8/8/8/8/7p/K7").unwrap();
    let mut game = Game::from_position(board, Color::Black);
    assert!(game.is_promotion(sq("h2"), sq("h1")));
    assert_eq!(game.make_move(sq("h2"), sq("h1"), None).unwrap(), "h2-h1=Q+");
    assert_eq!(game.board().get(sq("h1")), Some(Piece::new(PieceKind::Queen, Color::Black)));
}

#[test]
fn captures_are_recorded() {
    let mut game = started();
    play(&mut game, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(game.history().last().map(String::as_str), Some("e4xd5"));
    assert_eq!(game.board().pieces().count(), 31);
}

#[test]
fn only_king_moves_escape_rank_check() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/r3K2R").unwrap();
    let game = Game::from_position(board, Color::White);
    assert!(game.in_check(Color::White));
    assert!(game.legal_moves_from(sq("h1")).is_empty());
    let mut king = game.legal_moves_from(sq("e1"));
    king.sort();
    assert_eq!(king, vec![sq("d2"), sq("e2"), sq("f2")]);
}

#[test]
fn check_is_met_by_block_or_capture() {
    let board = Board::from_placement("4r2k/8/5N2/8/8/8/8/2B1K3").unwrap();
    let mut game = Game::from_position(board, Color::White);
    assert!(game.in_check(Color::White));

    assert_eq!(game.legal_moves_from(sq("c1")), vec![sq("e3")]);
    let mut knight = game.legal_moves_from(sq("f6"));
    knight.sort();
    assert_eq!(knight, vec![sq("e8"), sq("e4")]);
    let mut king = game.legal_moves_from(sq("e1"));
    king.sort();
    assert_eq!(king, vec![sq("d2"), sq("f2"), sq("d1"), sq("f1")]);

    assert_eq!(game.make_move(sq("f6"), sq("e8"), None).unwrap(), "Nf6xe8");
    assert!(!game.in_check(Color::White));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn knight_check_limits_king_flight() {
    let board = Board::from_placement("4k3/8/8/8/8/3n4/8/4K3").unwrap();
    let game = Game::from_position(board, Color::White);
    assert!(game.in_check(Color::White));
    let mut king = game.legal_moves_from(sq("e1"));
    king.sort();
    // f2 is covered by the knight.
    assert_eq!(king, vec![sq("d2"), sq("e2"), sq("d1"), sq("f1")]);
}

#[test]
fn pawn_check_limits_king_flight() {
    let board = Board::from_placement("4k3/8/8/8/8/5p2/3p4/4K3").unwrap();
    let game = Game::from_position(board, Color::White);
    assert!(game.in_check(Color::White));
    let mut king = game.legal_moves_from(sq("e1"));
    king.sort();
    // e2 is covered by the f3 pawn; the checking pawn itself can be taken.
    assert_eq!(king, vec![sq("d2"), sq("f2"), sq("d1"), sq("f1")]);

    let quiet = Board::from_placement("4k3/8/8/8/8/8/4p3/4K3").unwrap();
    assert!(!Game::from_position(quiet, Color::White).in_check(Color::White));
}

#[test]
fn mover_is_never_left_in_check() {
    let mut game = started();
    for ply in 0..120 {
        if game.is_game_over() {
            break;
        }
        let moves = all_legal(&game);
        assert!(!moves.is_empty());
        // Walk a varied but deterministic line through the move list.
        let mv = moves[(ply * 7) % moves.len()];
        let mover = game.side_to_move();
        game.apply(mv).unwrap();
        assert!(!game.in_check(mover), "{mover} left in check after {mv}");
        assert_eq!(game.side_to_move(), mover.opponent());
        assert!(rules::in_check(game.board(), mover) == game.in_check(mover));
    }
    assert!(!game.history().is_empty());
}
