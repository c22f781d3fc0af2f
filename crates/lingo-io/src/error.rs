//! Error types for resource reading.

use thiserror::Error;

/// Errors that can occur while reading a resource file.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The resource file could not be read from disk.
    #[error("failed to read resource file {path}: {source}")]
    Unreadable {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The resource file was read but does not conform to the format.
    ///
    /// A malformed resource never yields a partial mapping.
    #[error("malformed resource file {path}: {detail}")]
    Malformed {
        /// Path of the offending file.
        path: String,
        /// Parser diagnostic.
        detail: String,
    },
}

/// Result type for reader operations.
pub type ReadResult<T> = Result<T, ReadError>;
