//! Error types for the riposte crate

use thiserror::Error;

/// Main error type for the riposte crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("context has {got} moves but the model order is {expected}")]
    ContextLength { expected: usize, got: usize },

    #[error("model order must be at least 1")]
    ZeroOrder,

    #[error("unrecognized move '{input}' (expected rock, paper, or scissors)")]
    ParseMove { input: String },

    #[error("invalid opponent '{input}'. Expected one of: {expected}")]
    ParseOpponent { input: String, expected: String },

    #[error("cycle opponent needs a non-empty move pattern")]
    EmptyPattern,

    #[error("match already over")]
    MatchOver,

    #[error(
        "saved model declares order {declared} but contains context key '{key}' of length {got}"
    )]
    ModelKeyLength {
        declared: usize,
        key: String,
        got: usize,
    },

    #[error("saved model contains invalid character '{character}' in context key '{key}'")]
    ModelKeyCharacter { character: char, key: String },

    #[error("saved model format version {found} is not supported (current version is {current})")]
    ModelVersion { found: u32, current: u32 },

    #[error("failed to {operation}: {message}")]
    ModelCodec { operation: String, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
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
