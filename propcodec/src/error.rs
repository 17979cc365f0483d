//! All error types for the propcodec crate.
//!
//! Only whole-operation failures live here. Per-line and per-entry problems
//! (malformed lines, translations without an original) are recovered from and
//! reported as diagnostics instead, see [`crate::reconcile::MissingOriginal`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("invalid data: {0}")]
    DataMismatch(String),
}

impl Error {
    /// Returns `true` when the underlying file could not be read or written.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
