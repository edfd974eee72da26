//! Size computation for files and directory trees.
//!
//! This module holds the traversal that turns a path into a byte count. It
//! classifies every entry without following symbolic links, prunes hidden
//! entries when asked to, and either stays at the first level of a directory
//! or descends through the whole tree.

use std::{
    ffi::OsStr,
    fs::{self, FileType},
    io,
    path::Path,
};

use walkdir::WalkDir;

use crate::{config::SizeOptions, error::SizeError};

/// What a filesystem entry is, as reported by a non-dereferencing stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file; contributes its byte length
    RegularFile,

    /// A directory; summed, or descended into when recursive
    Directory,

    /// Symbolic links, devices, sockets, FIFOs and anything else
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_file() {
            Self::RegularFile
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

/// Whether an entry name marks a hidden entry (leading `.`).
///
/// Works on raw bytes so that names which are not valid UTF-8 are still
/// classified correctly.
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    starts_with_dot(name.as_encoded_bytes())
}

/// Whether the base name of `path` is hidden.
///
/// Only the last component is inspected, taken literally after trailing
/// separators are dropped: `.`, `..`, `dir/.` and `dir/..` all have a base
/// name starting with `.` and are hidden. An empty path counts as `.`.
#[must_use]
pub fn is_hidden_path(path: &Path) -> bool {
    starts_with_dot(base_name(path))
}

/// The raw last component of `path`, with trailing separators removed.
///
/// Unlike [`Path::file_name`], `.` and `..` are returned as-is instead of
/// being normalized away. A path made only of separators yields `/`.
fn base_name(path: &Path) -> &[u8] {
    let bytes = path.as_os_str().as_encoded_bytes();
    if bytes.is_empty() {
        return b".";
    }

    let end = bytes
        .iter()
        .rposition(|&b| !is_separator_byte(b))
        .map_or(0, |i| i + 1);
    if end == 0 {
        return b"/";
    }

    let trimmed = &bytes[..end];
    let start = trimmed
        .iter()
        .rposition(|&b| is_separator_byte(b))
        .map_or(0, |i| i + 1);

    &trimmed[start..]
}

fn is_separator_byte(byte: u8) -> bool {
    byte.is_ascii() && std::path::is_separator(char::from(byte))
}

fn starts_with_dot(name: &[u8]) -> bool {
    name.first() == Some(&b'.')
}

/// Computes the size of a path according to a fixed set of options.
///
/// The calculator keeps no state between calls, so one instance can be
/// reused for any number of paths.
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use path_size::{calculator::SizeCalculator, config::SizeOptions};
/// let calculator = SizeCalculator::new(SizeOptions {
///     include_hidden: false,
///     recursive: true,
/// });
/// let total = calculator.compute(Path::new("src"))?;
/// println!("{total}");
/// # Ok::<(), path_size::error::SizeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeCalculator {
    options: SizeOptions,
}

impl SizeCalculator {
    /// Create a calculator that applies `options` at every level.
    #[must_use]
    pub const fn new(options: SizeOptions) -> Self {
        Self { options }
    }

    /// The options this calculator applies.
    #[must_use]
    pub const fn options(&self) -> SizeOptions {
        self.options
    }

    /// Compute the total size of `path` in bytes.
    ///
    /// - A hidden root is reported as `0` when hidden entries are excluded,
    ///   without touching the filesystem.
    /// - A regular file yields its length.
    /// - A directory yields the sum of the regular files directly inside it,
    ///   plus, when recursive, the sizes of its subdirectories computed the
    ///   same way.
    /// - Symbolic links and special files inside a directory are skipped.
    ///
    /// # Errors
    ///
    /// - [`SizeError::Io`] if the root or any visited entry cannot be
    ///   stat'ed, or a directory cannot be listed. The first failure aborts
    ///   the whole computation.
    /// - [`SizeError::UnsupportedFileType`] if `path` itself is a symbolic
    ///   link or any other entry that is neither a file nor a directory.
    pub fn compute(&self, path: &Path) -> Result<u64, SizeError> {
        if !self.options.include_hidden && is_hidden_path(path) {
            return Ok(0);
        }

        let metadata = fs::symlink_metadata(path).map_err(|e| SizeError::io(path, e))?;

        match EntryKind::from(metadata.file_type()) {
            EntryKind::RegularFile => Ok(metadata.len()),
            EntryKind::Directory => self.directory_size(path),
            EntryKind::Other => Err(SizeError::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Sum the regular files below `root`, honoring the hidden and recursion
    /// settings.
    ///
    /// Hidden entries are pruned before they are stat'ed, so nothing below a
    /// hidden directory is visited. Without recursion, subdirectories show up
    /// as entries of `root` but their contents are never visited.
    fn directory_size(&self, root: &Path) -> Result<u64, SizeError> {
        let include_hidden = self.options.include_hidden;
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };

        let entries = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || include_hidden || !is_hidden(entry.file_name())
            });

        let mut total = 0u64;

        for entry in entries {
            let entry = entry.map_err(|e| walk_error(root, e))?;

            if EntryKind::from(entry.file_type()) == EntryKind::RegularFile {
                let metadata = entry.metadata().map_err(|e| walk_error(root, e))?;
                total += metadata.len();
            }
        }

        Ok(total)
    }
}

/// Convert a walk failure into a [`SizeError`] naming the entry that failed.
fn walk_error(root: &Path, err: walkdir::Error) -> SizeError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));

    SizeError::Io { path, source }
}
