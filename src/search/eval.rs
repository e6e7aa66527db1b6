use crate::board::{Board, Color, Piece};
use crate::config::PieceValues;

// Side-agnostic material in centipawns: positive means White has more material.
pub fn material_score(board: &Board, values: &PieceValues) -> i32 {
    board
        .pieces()
        .map(|(_, p)| match p {
            Piece::Empty => 0,
            Piece::Occupied(Color::White, k) => values.of(k),
            Piece::Occupied(Color::Black, k) => -values.of(k),
        })
        .sum()
}

// Material from `color`'s point of view: larger is always better for the mover.
#[inline]
pub fn signed_score(board: &Board, color: Color, values: &PieceValues) -> i32 {
    let base = material_score(board, values);
    if color == Color::White { base } else { -base }
}
