//! Resolved options for computing and displaying a size.

/// Controls which entries contribute to a size.
///
/// Passed by value through the whole traversal; nested directories see the
/// same settings as the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeOptions {
    /// Count entries whose name starts with `.`
    pub include_hidden: bool,

    /// Descend into subdirectories
    pub recursive: bool,
}

/// Controls how a computed size is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Render with KB/MB/GB/... units instead of plain bytes
    pub human: bool,

    /// Print a JSON document instead of the tab-separated line
    pub json: bool,

    /// Print the effective settings to stderr
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_options_default() {
        let opts = SizeOptions::default();

        assert!(!opts.include_hidden);
        assert!(!opts.recursive);
    }

    #[test]
    fn test_size_options_copy() {
        let original = SizeOptions {
            include_hidden: true,
            recursive: false,
        };
        let copied = original;

        assert_eq!(original, copied);
    }

    #[test]
    fn test_display_options_default() {
        let opts = DisplayOptions::default();

        assert!(!opts.human);
        assert!(!opts.json);
        assert!(!opts.verbose);
    }
}
