//! Configuration file support for persistent defaults.
//!
//! Settings are read from `~/.config/path-size/config.toml` (or the
//! platform-specific equivalent). Every value is optional and acts as a
//! default that the matching command-line flag can turn on.
//!
//! # Layering
//!
//! The precedence order is: **CLI flag > config file > `false`**.
//!
//! # Example config
//!
//! ```toml
//! human = true
//! all = false
//! recursive = true
//! json = false
//! verbose = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values the file actually
/// sets and layer them under the CLI flags.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Print sizes with KB/MB/GB/... units
    pub human: Option<bool>,

    /// Include hidden files and directories
    pub all: Option<bool>,

    /// Descend into subdirectories
    pub recursive: Option<bool>,

    /// Emit JSON instead of the tab-separated line
    pub json: Option<bool>,

    /// Print the effective settings to stderr
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/path-size/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("path-size").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file (or an undeterminable config directory) yields the
    /// default, empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, contains
    /// invalid TOML, or has a value of the wrong type.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
