use crate::game::board::Board;
use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::position::{Position, BOARD_SIZE};

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Unicode,
    /// FEN letters, upper case for white.
    Ascii,
}

/// Simple text renderer for the board.
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn render(board: &Board, glyphs: Glyphs) -> String {
        Self::render_marked(board, glyphs, &[])
    }

    /// Like [`BoardRenderer::render`], drawing empty squares in `marks` as
    /// `*` and prefixing occupied ones with `*`.
    pub fn render_marked(board: &Board, glyphs: Glyphs, marks: &[Position]) -> String {
        let mut output = String::new();
        for pos in Position::all() {
            if pos.col() == 0 {
                output.push_str(&format!("{} |", BOARD_SIZE - pos.row()));
            }
            match (board.get(pos), marks.contains(&pos)) {
                (Some(piece), true) => output.push_str(&format!("*{}", glyph(piece, glyphs))),
                (Some(piece), false) => output.push_str(&format!(" {}", glyph(piece, glyphs))),
                (None, true) => output.push_str(" *"),
                (None, false) => output.push_str(" ."),
            }
            if pos.col() == BOARD_SIZE - 1 {
                output.push('\n');
            }
        }
        output.push_str("   ----------------\n");
        output.push_str("    a b c d e f g h\n");
        output
    }
}

fn glyph(piece: Piece, glyphs: Glyphs) -> String {
    if glyphs == Glyphs::Ascii {
        return piece.to_string();
    }
    let ch = match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    };
    ch.to_string()
}

/// Group a move history two plies per line: `"1. e2-e4 e7-e5"`.
pub fn history_lines(history: &[String]) -> Vec<String> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_start_position() {
        let text = BoardRenderer::render(&Board::new(), Glyphs::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 | r n b q k b n r");
        assert_eq!(lines[4], "4 | . . . . . . . .");
        assert_eq!(lines[7], "1 | R N B Q K B N R");
        assert_eq!(lines[9], "    a b c d e f g h");
    }

    #[test]
    fn marks_targets() {
        let board = Board::from_placement("8/8/8/8/8/8/4P3/8").unwrap();
        let marks: [Position; 2] = ["e3".parse().unwrap(), "e4".parse().unwrap()];
        let text = BoardRenderer::render_marked(&board, Glyphs::Unicode, &marks);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "4 | . . . . * . . .");
        assert_eq!(lines[6], "2 | . . . . ♙ . . .");
    }

    #[test]
    fn marked_capture_and_corners() {
        let board = Board::from_placement("r6k/8/8/3p4/4P3/8/8/K6R").unwrap();
        let marks: [Position; 3] = ["d5".parse().unwrap(), "a8".parse().unwrap(), "h1".parse().unwrap()];
        let text = BoardRenderer::render_marked(&board, Glyphs::Ascii, &marks);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8 |*r . . . . . . k");
        assert_eq!(lines[3], "5 | . . .*p . . . .");
        assert_eq!(lines[4], "4 | . . . . P . . .");
        assert_eq!(lines[7], "1 | K . . . . . .*R");
        assert_eq!(lines[8], "   ----------------");
    }

    #[test]
    fn history_is_grouped_by_move_number() {
        let history: Vec<String> = ["e2-e4", "e7-e5", "Ng1-f3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            history_lines(&history),
            vec!["1. e2-e4 e7-e5".to_string(), "2. Ng1-f3".to_string()]
        );
        assert!(history_lines(&[]).is_empty());
    }
}
