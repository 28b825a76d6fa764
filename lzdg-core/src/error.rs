//! Error types for the streaming side of data generation.
//!
//! Generation itself cannot fail: every parameter combination produces a
//! well-defined (if degenerate) stream. Errors only come from the writer a
//! stream is sent to, or from reserving scratch memory.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the streaming pipeline.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing generated data.
    Io(std::io::Error),

    /// Requested buffer could not be allocated.
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::AllocationFailed { capacity } => {
                write!(f, "unable to allocate buffer of {capacity} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::AllocationFailed { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
