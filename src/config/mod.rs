//! Configuration for a size query.
//!
//! [`options`] holds the resolved settings handed to the calculator and the
//! output layer; [`file`] holds the optional persistent defaults read from
//! `config.toml`.

pub mod file;
pub mod options;

pub use file::FileConfig;
pub use options::{DisplayOptions, SizeOptions};
