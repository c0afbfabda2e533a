//! Error types for album-catalog

use std::num::ParseIntError;

use thiserror::Error;

use crate::types::AlbumId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid album id {raw:?}: {source}")]
    InvalidId {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// Path segment that could not be read as text at all
    #[error("invalid album id: {0}")]
    MalformedId(String),

    #[error("invalid album body: {0}")]
    InvalidBody(String),

    #[error("album not found")]
    AlbumNotFound(AlbumId),
}

impl Error {
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Error::InvalidBody(msg.into())
    }

    /// True for errors caused by malformed client input.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidId { .. } | Error::MalformedId(_) | Error::InvalidBody(_)
        )
    }
}
