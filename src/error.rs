// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised outside the notification API itself.
///
/// Raising, dismissing and pausing notifications never fails; these variants
/// only come from configuration I/O and from parsing user input (CLI).
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A notification level name that is not one of `info`, `success`,
    /// `warn`/`warning` or `error`.
    InvalidLevel(String),
    /// Malformed command line.
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidLevel(level) => write!(f, "Invalid notification level: {}", level),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

impl From<crate::diagnostics::ExportError> for Error {
    fn from(err: crate::diagnostics::ExportError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
