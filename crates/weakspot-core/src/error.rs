//! Core error types.
//!
//! These are defined here so the status store can classify persistence
//! failures without string matching, and so every crate shares one parse
//! error for the item ID encoding.

use thiserror::Error;

/// Errors that can occur when talking to a status storage backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backing store cannot be used at all (missing directory,
    /// permissions, disabled storage).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing store refused the payload for size reasons.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// An I/O error from a file-based backend.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing the string encoding of an item ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// Fewer than three `-`-separated tokens.
    #[error("item ID needs a lesson ID and two trailing index tokens")]
    MissingParts,

    /// The lesson portion was empty.
    #[error("item ID has an empty lesson ID")]
    EmptyLesson,

    /// A trailing index token was not a bare non-negative integer.
    #[error("index token is not a non-negative integer: {0:?}")]
    BadIndex(String),
}
