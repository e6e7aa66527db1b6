//! Pseudo-legal move generation on the mailbox board.
//!
//! Every generator ignores king safety. Destination order is fixed (the
//! offset/direction tables below, scanned in order) because move selection
//! breaks ties by first occurrence.

use crate::board::{is_same_color, Board, Color, Piece, PieceKind, Square};
use crate::moves::Move;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const QUEEN_DIRS: [(i8, i8); 8] =
    [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Row-major over the 3x3 neighbourhood, centre skipped.
pub const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

#[inline]
fn open_to(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).color() != Some(color)
}

pub fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let dir = color.forward();

    let one = from.offset(dir, 0);
    if one.in_bounds() && board.is_empty(one) {
        out.push(one);
        let two = from.offset(2 * dir, 0);
        if from.row == color.pawn_start_row() && two.in_bounds() && board.is_empty(two) {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        let to = from.offset(dir, dc);
        if to.in_bounds() && board.piece_at(to).color() == Some(!color) {
            out.push(to);
        }
    }
    out
}

fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| to.in_bounds() && open_to(board, to, color))
        .collect()
}

/// Walks each direction until the edge or the first occupied square, which is
/// included only when it holds an enemy.
pub fn slide_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while to.in_bounds() {
            match board.piece_at(to) {
                Piece::Empty => out.push(to),
                occupant => {
                    if occupant.color() != Some(color) {
                        out.push(to);
                    }
                    break;
                }
            }
            to = to.offset(dr, dc);
        }
    }
    out
}

pub fn knight_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step_moves(board, from, color, &KNIGHT_OFFSETS)
}

pub fn bishop_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_moves(board, from, color, &BISHOP_DIRS)
}

pub fn rook_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_moves(board, from, color, &ROOK_DIRS)
}

pub fn queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_moves(board, from, color, &QUEEN_DIRS)
}

pub fn king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step_moves(board, from, color, &KING_OFFSETS)
}

/// Destinations for whatever stands on `from`; empty for an empty or
/// off-board square.
pub fn moves_for_piece(board: &Board, from: Square) -> Vec<Square> {
    let Some(Piece::Occupied(color, kind)) = board.get(from) else {
        return Vec::new();
    };
    match kind {
        PieceKind::Pawn => pawn_moves(board, from, color),
        PieceKind::Knight => knight_moves(board, from, color),
        PieceKind::Bishop => bishop_moves(board, from, color),
        PieceKind::Rook => rook_moves(board, from, color),
        PieceKind::Queen => queen_moves(board, from, color),
        PieceKind::King => king_moves(board, from, color),
    }
}

/// `moves_for_piece` minus anything that lands on a friendly piece.
pub fn candidate_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(mover) = board.get(from) else { return Vec::new() };
    moves_for_piece(board, from)
        .into_iter()
        .filter(|&to| !is_same_color(mover, board.piece_at(to)))
        .collect()
}

/// Every pseudo-legal move for `color`, squares row-major, then each piece's
/// own destination order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.pieces() {
        if piece.color() != Some(color) {
            continue;
        }
        out.extend(candidate_destinations(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_offsets_scan_row_major() {
        let mut expected: Vec<(i8, i8)> = Vec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr != 0 || dc != 0 {
                    expected.push((dr, dc));
                }
            }
        }
        assert_eq!(KING_OFFSETS.to_vec(), expected);
    }

    #[test]
    fn queen_dirs_are_rook_then_bishop() {
        assert_eq!(&QUEEN_DIRS[..4], &ROOK_DIRS[..]);
        assert_eq!(&QUEEN_DIRS[4..], &BISHOP_DIRS[..]);
    }
}
