// Mailbox chess engine: pseudo-legal movegen + greedy one-ply search
pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod search;
pub mod selfplay;
pub mod uci;

pub use board::{Board, Color, Piece, PieceKind, Position, Square};
pub use config::{EngineConfig, PieceValues};
pub use error::EngineError;
pub use movegen::{all_moves, moves_for_piece};
pub use moves::{apply_move, Move};
pub use search::eval::material_score;
pub use search::{select_move, SearchResult, Searcher};
