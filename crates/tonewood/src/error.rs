//! Error types for the tonewood crate.

use std::fmt;
use std::io;

use crate::rules::RuleError;
use crate::stream::StreamError;

/// Errors that can occur while highlighting.
#[derive(Debug)]
pub enum Error {
    /// Rule set configuration was invalid.
    Rule(RuleError),
    /// A token dump failed to parse.
    Stream(StreamError),
    /// Writing rendered output failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Rule(e) => write!(f, "rule configuration error: {e}"),
            Error::Stream(e) => write!(f, "token dump error: {e}"),
            Error::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rule(e) => Some(e),
            Error::Stream(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<RuleError> for Error {
    fn from(e: RuleError) -> Self {
        Error::Rule(e)
    }
}

impl From<StreamError> for Error {
    fn from(e: StreamError) -> Self {
        Error::Stream(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
