/// Error types for the signature library and application paths
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in a fallible library operation.
///
/// Listing and deleting never surface these; only construction and
/// `save` do.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed an empty image or name
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode signature image as PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("could not determine the user's home directory")]
    NoHomeDir,

    #[error("background task failed: {0}")]
    Task(String),
}

impl Error {
    /// The underlying I/O error kind, if this error came from the filesystem
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::CreateDir { source, .. } | Error::Write { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
