//! Error types for Meshi.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    AlreadyExists(String),

    /// A request that could not be decoded (bad path segment, malformed body).
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The canonical "unknown meetup" error.
    pub fn meetup_not_found() -> Self {
        Self::NotFound("Meetup not found".into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
