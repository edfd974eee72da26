//! Size formatting utilities.
//!
//! Byte counts are rendered either as a plain integer with a `B` suffix or,
//! in human-readable mode, scaled by powers of 1024 and labelled with the
//! matching unit.

use std::path::Path;

/// Units in increasing order, each 1024 times the previous one.
pub const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const UNIT_BASE: f64 = 1024.0;

/// Render a byte count.
///
/// With `human` off the result is the exact byte count followed by `B`.
/// With `human` on, the value is divided by 1024 until it drops below 1024 or
/// the largest unit (`EB`) is reached. Plain bytes are printed without a
/// decimal point; every larger unit gets exactly one fractional digit.
///
/// # Examples
///
/// ```
/// # use path_size::utils::format_size;
/// assert_eq!(format_size(0, false), "0B");
/// assert_eq!(format_size(1023, true), "1023B");
/// assert_eq!(format_size(1536, true), "1.5KB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64, human: bool) -> String {
    if !human {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= UNIT_BASE && unit < UNITS.len() - 1 {
        value /= UNIT_BASE;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes}{}", UNITS[0])
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}

/// Join a formatted size and the queried path with a tab.
#[must_use]
pub fn format_output(size: &str, path: &Path) -> String {
    format!("{size}\t{}", path.display())
}
