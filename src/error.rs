//! Error types for size computation.
//!
//! The calculator surfaces exactly two kinds of failure: an operating-system
//! error from a stat or directory listing (passed through with its original
//! [`io::ErrorKind`]), or a root path that is neither a regular file nor a
//! directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors returned by [`crate::calculator::SizeCalculator::compute`].
#[derive(Debug, Error)]
pub enum SizeError {
    /// A stat or directory listing failed.
    ///
    /// Covers missing paths, permission problems and any other I/O failure.
    /// The underlying error is kept as-is so callers can inspect its kind.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path whose metadata or listing could not be read.
        path: PathBuf,
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// The root path is a symbolic link, device, socket, FIFO or other
    /// non-regular, non-directory entry.
    #[error("unsupported file type: {}", path.display())]
    UnsupportedFileType {
        /// The offending root path.
        path: PathBuf,
    },
}

impl SizeError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The OS error kind, if this is an I/O failure.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::UnsupportedFileType { .. } => None,
        }
    }

    /// Whether the failure means the path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::UnsupportedFileType { path } => path,
        }
    }
}
