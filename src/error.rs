// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-level error type for configuration and filesystem concerns.
///
/// Locale fetching has its own error type on the port seam
/// ([`crate::application::port::locales::LocalesError`]) because those
/// failures are passed through to the widget rather than bubbled up.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
