use super::piece::{Color, Piece, PieceKind};
use super::square::{Square, BOARD_SIZE};
use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

const N: usize = BOARD_SIZE as usize;

const BACK_RANK: [PieceKind; N] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Fixed 8x8 mailbox. Every cell holds a token; `clone()` is a full deep copy
/// because the rows are inline arrays, never shared storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[Piece::Empty; N]; N] }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (c, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][c] = Piece::new(Color::Black, kind);
            b.cells[1][c] = Piece::new(Color::Black, PieceKind::Pawn);
            b.cells[6][c] = Piece::new(Color::White, PieceKind::Pawn);
            b.cells[7][c] = Piece::new(Color::White, kind);
        }
        b
    }

    /// Occupant of an in-bounds square. Callers check bounds first.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        debug_assert!(sq.in_bounds(), "square off board: {sq:?}");
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Occupant, or `None` when the square is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() { Some(self.piece_at(sq)) } else { None }
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.in_bounds(), "square off board: {sq:?}");
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    /// False for off-board squares: there is nothing to move onto.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        matches!(self.get(sq), Some(Piece::Empty))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().map(move |sq| (sq, self.piece_at(sq))).filter(|(_, p)| !p.is_empty())
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.pieces().any(|(_, p)| p == Piece::new(color, PieceKind::King))
    }
}

#[inline]
pub fn is_empty(board: &Board, sq: Square) -> bool {
    board.is_empty(sq)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|p| p.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{self}")
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Eight rows of eight piece characters, row 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != N {
            return Err(EngineError::InvalidBoard(format!("expected {N} rows, got {}", rows.len())));
        }
        let mut b = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != N {
                return Err(EngineError::InvalidBoard(format!("row {r} has {} cells", chars.len())));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                b.cells[r][c] = Piece::from_char(ch)?;
            }
        }
        Ok(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_text_layout() {
        let text = Board::startpos().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[1], "pppppppp");
        assert_eq!(rows[4], "........");
        assert_eq!(rows[6], "PPPPPPPP");
        assert_eq!(rows[7], "RNBQKBNR");
        assert_eq!(text.parse::<Board>().unwrap(), Board::startpos());
    }

    #[test]
    fn rejects_short_rows() {
        let err = "rnbqkbnr\npppppppp\n".parse::<Board>();
        assert!(err.is_err());
    }
}
