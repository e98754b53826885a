//! Runtime filesystem errors

use std::io;

use thiserror::Error;

use crate::codec::DecodeError;

/// Result type for virtual filesystem operations
pub type FsResult<T> = Result<T, FsError>;

/// Errors returned by the virtual filesystem.
#[derive(Error, Debug)]
pub enum FsError {
    /// Key is not in the manifest
    #[error("{0}: file does not exist")]
    NotFound(String),

    /// `read_dir` on a file entry
    #[error("{0}: not a directory")]
    NotADirectory(String),

    /// Content read on a directory entry
    #[error("{0}: is a directory")]
    IsADirectory(String),

    /// Directory entry without a recorded listing
    #[error("{0}: is a directory, but no listing was recorded for it")]
    MissingListing(String),

    /// `read_dir(count > 0)` on an empty directory
    #[error("end of directory")]
    EndOfDirectory,

    /// Payload could not be decoded; the same error is returned on every retry
    #[error("{key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    /// Content requested as text is not UTF-8
    #[error("{0}: content is not valid UTF-8")]
    InvalidUtf8(String),

    /// Error from the real filesystem, passed through unchanged
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FsError {
    /// True for both a missing manifest key and a missing file on disk.
    pub fn is_not_found(&self) -> bool {
        match self {
            FsError::NotFound(_) => true,
            FsError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(e) => e,
            FsError::NotFound(_) => io::Error::new(io::ErrorKind::NotFound, err),
            FsError::EndOfDirectory => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            FsError::Decode { .. } | FsError::InvalidUtf8(_) => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            other => io::Error::other(other),
        }
    }
}
