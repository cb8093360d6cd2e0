//! Error types for fixedlru

use std::fmt;
use std::io;

/// Result type alias for fixedlru operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and configuration
#[derive(Debug)]
pub enum Error {
    /// Capacity must be at least 1
    InvalidCapacity(usize),

    /// Malformed configuration document
    Config(String),

    /// I/O error while reading configuration
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", cap)
            }
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
