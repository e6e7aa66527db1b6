use thiserror::Error;

/// Failures at the crate boundary: text parsing, config loading, move
/// submission. The engine operations themselves are total.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
