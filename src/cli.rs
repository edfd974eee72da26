//! Command-line interface definition and argument parsing.
//!
//! This module defines the command-line arguments and their defaults using
//! [clap](https://docs.rs/clap/).
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI flags can override.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use path_size::config::{DisplayOptions, FileConfig, SizeOptions};

/// Flags that decide which entries are counted.
#[derive(Parser)]
struct TraversalArgs {
    /// Include hidden files and directories
    ///
    /// Entries whose name starts with `.` are skipped unless this is set.
    /// A hidden path given directly on the command line reports 0 without it.
    #[arg(short = 'a', long)]
    all: bool,

    /// Recursive size of directories
    ///
    /// Without this flag only the regular files directly inside a directory
    /// are summed.
    #[arg(short = 'r', long)]
    recursive: bool,
}

/// Flags that decide how the result is printed.
#[derive(Parser)]
struct DisplayArgs {
    /// Human-readable sizes (auto-select unit)
    #[arg(short = 'H', long)]
    human: bool,

    /// Output the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Print the effective settings to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "path-size")]
#[command(about = "Print size of a file or directory")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// File or directory to measure
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Traversal options
    #[command(flatten)]
    traversal: TraversalArgs,

    /// Display options
    #[command(flatten)]
    display: DisplayArgs,
}

impl Cli {
    /// The path to measure, if one was given.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Resolve traversal options from CLI flags and the config file.
    ///
    /// Each flag is on if set on the command line or in the config file.
    #[must_use]
    pub fn size_options(&self, config: &FileConfig) -> SizeOptions {
        SizeOptions {
            include_hidden: self.traversal.all || config.all.unwrap_or(false),
            recursive: self.traversal.recursive || config.recursive.unwrap_or(false),
        }
    }

    /// Resolve display options from CLI flags and the config file.
    #[must_use]
    pub fn display_options(&self, config: &FileConfig) -> DisplayOptions {
        DisplayOptions {
            human: self.display.human || config.human.unwrap_or(false),
            json: self.display.json || config.json.unwrap_or(false),
            verbose: self.display.verbose || config.verbose.unwrap_or(false),
        }
    }
}
