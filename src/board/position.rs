use super::{Board, Color, Piece, Square};
use crate::error::{EngineError, Result};
use crate::movegen::{all_moves, candidate_destinations};
use crate::moves::{apply_move, Move};
use crate::search::Searcher;
use log::debug;

/// The live game: one board plus whose turn it is. The board is only ever
/// changed through [`Position::play`] (and the helpers built on it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::startpos(), side_to_move: Color::White }
    }

    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self { board, side_to_move }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Color { self.side_to_move }

    /// Destinations a click on `sq` should highlight: empty unless the square
    /// holds a piece of the side to move.
    pub fn candidates(&self, sq: Square) -> Vec<Square> {
        match self.board.get(sq).and_then(Piece::color) {
            Some(c) if c == self.side_to_move => candidate_destinations(&self.board, sq),
            _ => Vec::new(),
        }
    }

    /// Applies `mv` after re-deriving the source square's candidates, then
    /// hands the turn over. Returns the captured piece.
    pub fn play(&mut self, mv: Move) -> Result<Piece> {
        if !mv.to.in_bounds() || !self.candidates(mv.from).contains(&mv.to) {
            return Err(EngineError::IllegalMove(format!("{mv} for {}", self.side_to_move)));
        }
        let captured = apply_move(&mut self.board, mv);
        debug!("{} plays {mv}{}", self.side_to_move, if captured.is_empty() { String::new() } else { format!(" capturing {captured}") });
        self.side_to_move = !self.side_to_move;
        Ok(captured)
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<Piece> {
        let mv: Move = mv_uci.parse()?;
        self.play(mv)
    }

    /// Hands the turn over without moving.
    pub fn pass(&mut self) {
        debug!("{} passes", self.side_to_move);
        self.side_to_move = !self.side_to_move;
    }

    /// Lets the searcher move for the side to move, or passes when it has no
    /// moves. Returns the move played.
    pub fn play_ai(&mut self, searcher: &Searcher) -> Option<Move> {
        match searcher.select_move(&self.board, self.side_to_move) {
            Some(mv) => {
                let captured = apply_move(&mut self.board, mv);
                debug!("{} (engine) plays {mv}, captured {captured}", self.side_to_move);
                self.side_to_move = !self.side_to_move;
                Some(mv)
            }
            None => {
                self.pass();
                None
            }
        }
    }

    pub fn moves_count(&self) -> usize {
        all_moves(&self.board, self.side_to_move).len()
    }

    /// Plays `moves` in order on a copy; the first bad move fails the whole list.
    pub fn with_moves(&self, moves: &[String]) -> Result<Self> {
        let mut pos = self.clone();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self> {
        Self::startpos().with_moves(moves)
    }
}
