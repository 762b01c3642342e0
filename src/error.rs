//! Error taxonomy for the session catalog.
//!
//! Line-level decode failures never show up here: the record parser absorbs them.
//! What remains is "the thing is not there", "the filesystem refused", a bad
//! identifier from the outside world, or an unreadable archive overlay.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("corrupt archive overlay {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Classify an `io::Error` hit while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound { path: path.to_path_buf() }
        } else {
            Error::Io { path: path.to_path_buf(), source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
