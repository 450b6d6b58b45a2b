use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed trivia record: {0}")]
    MalformedRecord(String),
    #[error("Cannot sample {requested} items out of {available}")]
    InvalidSampleSize { requested: usize, available: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match the game config")]
    InvalidBoardShape,
}

impl GameError {
    /// Failures caused by the trivia service, where trying again later may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::MalformedRecord(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
