use std::path::PathBuf;
use thiserror::Error;

/// Run-level errors. Anything surfacing here stops the run before or after probing,
/// never in the middle of it.
#[derive(Error, Debug)]
pub enum HuntError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Target file error: {path:?} - {message}")]
    TargetFileError {
        path: PathBuf,
        message: String,
    },

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<anyhow::Error> for HuntError {
    fn from(error: anyhow::Error) -> Self {
        HuntError::UnexpectedError(error.to_string())
    }
}

pub type HuntResult<T> = std::result::Result<T, HuntError>;

/// Failure of a single probe. Contained to its target and reported as a `Failed` outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("can't create request: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ProbeError::InvalidUrl(error.to_string())
        } else {
            ProbeError::Request(error.to_string())
        }
    }
}
