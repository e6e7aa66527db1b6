use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row delta of a pawn step: White heads toward row 0, Black toward row 7.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// One board cell. `Empty` is a token like any other, not an absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Occupied(color, kind)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(c, _) => Some(c),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(_, k) => Some(k),
        }
    }

    /// Uppercase for White, lowercase for Black, `.` for an empty cell.
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Occupied(Color::White, k) => k.letter().to_ascii_uppercase(),
            Piece::Occupied(Color::Black, k) => k.letter(),
        }
    }

    pub fn from_char(c: char) -> Result<Self, EngineError> {
        if c == '.' {
            return Ok(Piece::Empty);
        }
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(EngineError::InvalidPiece(c)),
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Ok(Piece::Occupied(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[inline]
pub fn color_of(piece: Piece) -> Option<Color> {
    piece.color()
}

/// False whenever either side is empty.
#[inline]
pub fn is_enemy(p1: Piece, p2: Piece) -> bool {
    match (p1.color(), p2.color()) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}

/// False whenever either side is empty.
#[inline]
pub fn is_same_color(p1: Piece, p2: Piece) -> bool {
    match (p1.color(), p2.color()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping_covers_all_tokens() {
        for c in "PNBRQKpnbrqk.".chars() {
            assert_eq!(Piece::from_char(c).unwrap().to_char(), c);
        }
        assert!(Piece::from_char('x').is_err());
    }

    #[test]
    fn empty_is_neither_enemy_nor_friend() {
        let wp = Piece::new(Color::White, PieceKind::Pawn);
        let bp = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(is_enemy(wp, bp));
        assert!(!is_same_color(wp, bp));
        assert!(is_same_color(wp, Piece::new(Color::White, PieceKind::King)));
        assert!(!is_enemy(wp, Piece::Empty));
        assert!(!is_same_color(Piece::Empty, Piece::Empty));
    }
}
