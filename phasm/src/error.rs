//! Error type shared by every module in this crate.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhasmError {
    /// A length, range, or threshold that makes no sense.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A symbol the sequence type does not accept.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhasmError>;
