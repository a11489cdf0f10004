//! Error types for compression and decompression.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing, unreadable, empty or too large to encode.
    #[error("input error: {0}")]
    Input(String),

    /// The compressed stream is corrupt or truncated.
    #[error("format error: {0}")]
    Format(String),

    /// The output file could not be created or written.
    #[error("could not write output file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decompression was requested for a file whose suffix names no known container.
    #[error("unknown compression format: {0}")]
    UnknownFormat(String),

    /// An algorithm override that is not `huffman`, `lzw` or `auto`.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl Error {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
