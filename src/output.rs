//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the result of a size query is printed as
//! a single JSON object instead of the tab-separated line.

use std::path::Path;

use serde::Serialize;

use crate::{config::SizeOptions, utils::format_size};

/// JSON document emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The path exactly as it was queried.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// The size rendered the same way as the text output (e.g. `"1.5KB"`).
    pub size_formatted: String,

    /// Whether `size_formatted` uses human-readable units.
    pub human: bool,

    /// Whether hidden entries were counted.
    pub all: bool,

    /// Whether subdirectories were descended into.
    pub recursive: bool,
}

impl JsonOutput {
    /// Build the output document for a computed size.
    #[must_use]
    pub fn new(path: &Path, size: u64, options: SizeOptions, human: bool) -> Self {
        Self {
            path: path.display().to_string(),
            size,
            size_formatted: format_size(size, human),
            human,
            all: options.include_hidden,
            recursive: options.recursive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_fields() {
        let options = SizeOptions {
            include_hidden: true,
            recursive: false,
        };
        let output = JsonOutput::new(Path::new("dirA"), 1536, options, true);

        assert_eq!(output.path, "dirA");
        assert_eq!(output.size, 1536);
        assert_eq!(output.size_formatted, "1.5KB");
        assert!(output.human);
        assert!(output.all);
        assert!(!output.recursive);
    }

    #[test]
    fn test_json_output_serializes() {
        let output = JsonOutput::new(Path::new("a.txt"), 4, SizeOptions::default(), false);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["path"], "a.txt");
        assert_eq!(value["size"], 4);
        assert_eq!(value["size_formatted"], "4B");
        assert_eq!(value["human"], false);
        assert_eq!(value["all"], false);
        assert_eq!(value["recursive"], false);
    }
}
