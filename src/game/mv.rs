//! Move representation and coordinate notation.

use std::fmt;
use std::str::FromStr;

use super::error::ChessError;
use super::piece::PieceKind;
use super::position::Position;

/// A move as submitted by a front-end: origin, destination and the piece a
/// pawn should become if it reaches the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

/// Accepts `e2e4`, `e2-e4`, `e7e8q` and `e7e8=Q`.
impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ChessError::InvalidNotation(s.to_string());
        let compact: String = s.trim().chars().filter(|c| !matches!(c, '-' | '=')).collect();
        if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
            return Err(bad());
        }

        let from: Position = compact[0..2].parse().map_err(|_| bad())?;
        let to: Position = compact[2..4].parse().map_err(|_| bad())?;
        let promotion = match compact[4..].chars().next() {
            Some(c) => Some(PieceKind::from_symbol(c).ok_or_else(bad)?),
            None => None,
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_forms() {
        let plain: Move = "e2e4".parse().unwrap();
        assert_eq!(plain, Move::new("e2".parse().unwrap(), "e4".parse().unwrap()));
        assert_eq!("e2-e4".parse::<Move>().unwrap(), plain);

        let promo: Move = "e7e8=N".parse().unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "e2", "e2e9", "e7e8x", "z1a1", "e2e4e5"] {
            assert!(text.parse::<Move>().is_err(), "{text} should not parse");
        }
    }
}
