//! Error types for log compression operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for log compression operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured root path does not exist or is not a directory
    #[error("{}: No such directory", path.display())]
    PathNotFound {
        /// The offending configured path
        path: PathBuf,
    },

    /// Failed to open input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to enumerate a directory
    #[error("{}: Cannot read directory: {source}", path.display())]
    ReadDir {
        /// Path to the directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Compression operation failed
    #[error("{}: Compression failed: {message}", path.display())]
    Compression {
        /// Path to the file being compressed
        path: PathBuf,
        /// Error message from the encoder
        message: String,
    },

    /// Failed to remove input file
    #[error("{}: Cannot remove: {source}", path.display())]
    RemoveFile {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for log compression operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}
