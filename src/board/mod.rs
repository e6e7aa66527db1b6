//! Mailbox board model: piece tokens, squares, the 8x8 grid and the
//! game-turn [`Position`] built on top of it.

pub mod grid;
pub mod piece;
pub mod position;
pub mod square;

pub use grid::{is_empty, Board};
pub use piece::{color_of, is_enemy, is_same_color, Color, Piece, PieceKind};
pub use position::Position;
pub use square::{in_bounds, Square, BOARD_SIZE};
