use crate::board::{Board, Color};
use crate::movegen::all_moves;
use crate::moves::apply_move;

// Pseudo-legal perft: counts leaves of the move tree, alternating colours,
// cloning the board per child. No king-safety filtering, so counts match
// standard perft only while no side can be left in check.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = all_moves(board, color);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = board.clone();
        apply_move(&mut child, m);
        nodes += perft(&child, !color, depth - 1);
    }
    nodes
}
