//! Utility functions and helpers.
//!
//! This module contains the size formatting helpers used to render a
//! computed byte count.

pub mod size;

pub use size::{format_output, format_size};
