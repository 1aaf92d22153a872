//! Error types for the safe ZipSharpNative API

use std::fmt;

/// Result type for ZipSharpNative operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ZipSharpNative operations
#[derive(Debug)]
pub enum Error {
    /// Invalid argument
    InvalidArgument(String),
    /// Caller-provided buffer cannot hold the requested string
    BufferTooSmall {
        /// Bytes needed, including the NUL terminator
        required: usize,
        /// Bytes the caller offered
        available: usize,
    },
    /// Component id that does not name any [`Backend`](crate::Backend)
    UnknownComponent(u32),
    /// UTF-8 conversion error
    Utf8(std::str::Utf8Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "Buffer too small: {} bytes required, {} available",
                required, available
            ),
            Error::UnknownComponent(id) => write!(f, "Unknown component id: {}", id),
            Error::Utf8(e) => write!(f, "UTF-8 conversion error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Utf8(e)
    }
}
