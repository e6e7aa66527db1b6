use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board dimension along both axes.
pub const BOARD_SIZE: i8 = 8;

/// A (row, col) pair. Row 0 is Black's back rank (rank 8), col 0 is the a-file.
///
/// Coordinates are signed so that stepping off the edge yields a square that
/// simply fails [`in_bounds`] instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square { row: self.row + dr, col: self.col + dc }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        in_bounds(self)
    }

    /// Row-major over the whole board, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Square::new(r, c)))
    }
}

#[inline]
pub const fn in_bounds(sq: Square) -> bool {
    sq.row >= 0 && sq.row < BOARD_SIZE && sq.col >= 0 && sq.col < BOARD_SIZE
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::InvalidSquare(s.to_string()));
        }
        let (f, r) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(EngineError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new((b'8' - r) as i8, (f - b'a') as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_orientation() {
        assert_eq!("e2".parse::<Square>().unwrap(), Square::new(6, 4));
        assert_eq!("a8".parse::<Square>().unwrap(), Square::new(0, 0));
        assert_eq!("h1".parse::<Square>().unwrap(), Square::new(7, 7));
        assert_eq!(Square::new(4, 4).to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn all_is_row_major() {
        let v: Vec<Square> = Square::all().collect();
        assert_eq!(v.len(), 64);
        assert_eq!(v[0], Square::new(0, 0));
        assert_eq!(v[1], Square::new(0, 1));
        assert_eq!(v[8], Square::new(1, 0));
    }
}
