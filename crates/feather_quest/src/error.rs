//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid arguments and configuration, malformed bird data documents, unknown
//! identifiers, IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse bird data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing data: {0}")]
    MissingData(String),

    #[error("bird with id '{id}' not found")]
    NotFound { id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns `true` when the error stems from an unusable source document
    /// rather than from the caller or a missing entry.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::MissingData(_))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
