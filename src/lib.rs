//! # path-size
//!
//! Compute the size of a file or directory.
//!
//! A regular file reports its own length. A directory reports the sum of the
//! regular files it contains, optionally including hidden entries and
//! optionally descending into subdirectories. Symbolic links are never
//! followed.
//!
//! ## Modules
//!
//! - [`calculator`] - entry classification and the size traversal
//! - [`config`] - resolved options and the persistent config file
//! - [`error`] - the error taxonomy of a size query
//! - [`output`] - JSON output
//! - [`utils`] - byte count formatting

pub mod calculator;
pub mod config;
pub mod error;
pub mod output;
pub mod utils;
