use crate::board::{Board, Piece, PieceKind, Square};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source and destination. Validity comes only from the generator that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Coordinate notation, `e2e4`. A trailing promotion letter is accepted
    /// and dropped: pawns always promote to a queen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = match s.len() {
            4 => s,
            5 if s.is_char_boundary(4) && "qrbnQRBN".contains(&s[4..]) => &s[..4],
            _ => return Err(EngineError::InvalidMove(s.to_string())),
        };
        if !body.is_char_boundary(2) {
            return Err(EngineError::InvalidMove(s.to_string()));
        }
        let from = body[..2].parse::<Square>().map_err(|_| EngineError::InvalidMove(s.to_string()))?;
        let to = body[2..].parse::<Square>().map_err(|_| EngineError::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

/// Relocates the piece on `mv.from` to `mv.to` in place and returns the
/// previous occupant of `mv.to` (`Empty` when the move was quiet). A pawn
/// landing on its promotion row becomes a queen of the same color.
///
/// Both squares must be on the board. Evaluate on a `clone()` when the
/// original has to survive.
pub fn apply_move(board: &mut Board, mv: Move) -> Piece {
    let moved = board.piece_at(mv.from);
    let captured = board.piece_at(mv.to);
    board.set(mv.from, Piece::Empty);
    let landed = match moved {
        Piece::Occupied(color, PieceKind::Pawn) if mv.to.row == color.promotion_row() => {
            Piece::new(color, PieceKind::Queen)
        }
        other => other,
    };
    board.set(mv.to, landed);
    captured
}
