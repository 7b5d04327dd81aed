use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the console; the library core never produces them.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Configuration file could not be read or parsed
    #[error("config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Input document could not be read
    #[error("reading {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Input document is neither a valid object nor a list
    #[error("decoding {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// Output encoding failed
    #[error("encoding output: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for InsightError {
    fn from(e: serde_json::Error) -> Self {
        InsightError::Encode(e.to_string())
    }
}

impl From<serde_yaml::Error> for InsightError {
    fn from(e: serde_yaml::Error) -> Self {
        InsightError::Encode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
