use std::fmt;

use thiserror::Error;

/// Errors produced while declaring flags, parsing argv, or reading back a parse result.
///
/// Every variant carries a human-readable message; `kind()` gives the
/// classification callers use to pick an exit code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic failure, e.g. an empty parse payload.
    #[error("ERROR: {0}")]
    Error(String),

    /// Malformed flag declaration, missing required flag, unrecognized flag,
    /// or a payload that does not decode into a parse result.
    #[error("INVALID_USAGE: {0}")]
    InvalidUsage(String),

    /// A supplied value fails type, pattern or whitelist validation.
    #[error("INVALID_VALUE: {0}")]
    InvalidValue(String),

    /// A queried flag name does not exist in a parse result.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Token decoding failed at the byte level.
    #[error("INTERNAL_ERROR: {0}")]
    Internal(String),
}

/// Classification of an [`Error`] without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Error,
    InvalidUsage,
    InvalidValue,
    NotFound,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Error(_) => ErrorKind::Error,
            Self::InvalidUsage(_) => ErrorKind::InvalidUsage,
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Error(msg)
            | Self::InvalidUsage(msg)
            | Self::InvalidValue(msg)
            | Self::NotFound(msg)
            | Self::Internal(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "ERROR",
            Self::InvalidUsage => "INVALID_USAGE",
            Self::InvalidValue => "INVALID_VALUE",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
