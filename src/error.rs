//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode product: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Malformed answers: {0}")]
    MalformedAnswers(#[from] serde_json::Error),

    #[error("Invalid answers: {}", crate::validation::summarize(.0, 10))]
    InvalidAnswers(Vec<ValidationError>),

    #[error("Invalid catalog: {}", crate::validation::summarize(.0, 10))]
    InvalidCatalog(Vec<ValidationError>),
}

pub type Result<T> = std::result::Result<T, Error>;
