pub mod eval;
pub mod greedy;

pub use greedy::{select_move, SearchResult, Searcher};
