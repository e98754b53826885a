//! Error types for the bundling pipeline
//!
//! Uses `thiserror` for library errors. Runtime filesystem errors live in
//! [`crate::runtime::FsError`] and codec errors in [`crate::codec::DecodeError`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for building a manifest
#[derive(Error, Debug)]
pub enum EmbedError {
    /// The modification time override is not an integer
    #[error("modtime must be an integer: '{value}'")]
    InvalidModTime {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// An ignore/include expression failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Open, stat, list or read failure on a traversed path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two distinct source paths canonicalize to the same key
    #[error("{key}, {}: duplicate name after prefix removal", path.display())]
    DuplicateKey { key: String, path: PathBuf },

    /// The gzip stream failed while compressing a payload
    #[error("compression failed: {0}")]
    Compression(#[source] std::io::Error),

    /// The renderer failed to produce output
    #[error("failed to render manifest: {0}")]
    Render(String),

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Nothing was given to embed
    #[error("no files or directories to embed")]
    NoRoots,
}

impl EmbedError {
    /// Wrap an IO error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::fmt::Error> for EmbedError {
    fn from(err: std::fmt::Error) -> Self {
        EmbedError::Render(err.to_string())
    }
}
