//! Error types for the `lzdgen` front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Formats an error message for stderr.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"lzdgen"`).
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// A single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err.get_ref().and_then(|e| e.downcast_ref::<Error>()) {
        Some(cli_err) => format!("{program}: {cli_err}"),
        None => format!("{program}: {err}"),
    }
}

/// Main error type for `lzdgen` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Ratio is not a number or is below 1.0
    #[error("ratio must be a floating point value >= 1.0")]
    InvalidRatio {
        /// The rejected argument
        value: String,
    },

    /// Exponent is not a floating point number
    #[error("{which} exponent must be a floating point value")]
    InvalidExponent {
        /// Which exponent was rejected (`"literal"` or `"match"`)
        which: &'static str,
        /// The rejected argument
        value: String,
    },

    /// Seed is not an unsigned 64-bit integer
    #[error("seed value error")]
    InvalidSeed {
        /// The rejected argument
        value: String,
    },

    /// Size is zero, malformed or overflows
    #[error("size must be a positive integer")]
    InvalidSize {
        /// The rejected argument
        value: String,
    },

    /// No output file was named
    #[error("too few arguments")]
    MissingOutput,

    /// More than one output file was named
    #[error("too many arguments")]
    TooManyOutputs,

    /// Output file exists and `--force` was not given
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Failed to create output file
    #[error("unable to open output file: {}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing generated data failed
    #[error("write error: {source}")]
    Write {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The chunk buffer could not be allocated
    #[error("unable to allocate buffer of {capacity} bytes")]
    Allocation {
        /// Requested capacity in bytes
        capacity: usize,
    },
}

impl From<lzdg_core::Error> for Error {
    fn from(err: lzdg_core::Error) -> Self {
        match err {
            lzdg_core::Error::Io(source) => Error::Write { source },
            lzdg_core::Error::AllocationFailed { capacity } => Error::Allocation { capacity },
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::OutputExists { .. } => io::Error::new(io::ErrorKind::AlreadyExists, err),
            Error::CreateOutput { source, .. } | Error::Write { source } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
            Error::Allocation { .. } => io::Error::new(io::ErrorKind::OutOfMemory, err),
            _ => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}

/// Result type alias for `lzdgen` operations.
pub type Result<T> = std::result::Result<T, Error>;
