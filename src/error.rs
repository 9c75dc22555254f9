//! Error types for the gamesearch crate

use thiserror::Error;

/// Main error type for the gamesearch crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action}: {reason}")]
    InvalidAction { action: usize, reason: String },

    #[error("misconfigured game: {message}")]
    MisconfiguredGame { message: String },

    #[error("no legal actions available in state '{state}'")]
    SearchExhausted { state: String },

    #[error("board has the wrong number of cells: expected {expected}, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategyKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    pub(crate) fn misconfigured(message: impl Into<String>) -> Self {
        Error::MisconfiguredGame {
            message: message.into(),
        }
    }
}
