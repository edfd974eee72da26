//! # path-size
//!
//! Print the size of a file or directory.
//!
//! ## Usage
//!
//! ```bash
//! # Size of the regular files directly inside a directory
//! path-size ./logs
//!
//! # Whole tree, hidden entries included, in KB/MB/GB
//! path-size -r -a -H ./logs
//!
//! # Machine-readable output
//! path-size --json -r ./logs
//! ```
//!
//! Exit status is `0` on success, `1` when the size cannot be computed and
//! `2` on a usage error.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use path_size::{
    calculator::SizeCalculator,
    config::{DisplayOptions, FileConfig, SizeOptions},
    output::JsonOutput,
    utils::{format_output, format_size},
};
use std::{path::Path, process::exit};

/// Entry point for the path-size application.
///
/// Runs [`inner_main`] and turns any error into a message on stderr and a
/// non-zero exit status. Usage errors never get here: clap reports them
/// itself and exits with status `2`.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red().bold());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from the size computation (missing path, permission
/// denied, unsupported file type), from config-file handling, or from JSON
/// serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let Some(path) = args.path() else {
        bail!("path is required");
    };

    let file_config = load_config();
    let size_options = args.size_options(&file_config);
    let display = args.display_options(&file_config);

    if display.verbose {
        print_settings(path, size_options, display);
    }

    let total = SizeCalculator::new(size_options).compute(path)?;

    if display.json {
        let output = JsonOutput::new(path, total, size_options, display.human);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_output(&format_size(total, display.human), path));
    }

    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

/// Report the effective settings on stderr.
fn print_settings(path: &Path, size_options: SizeOptions, display: DisplayOptions) {
    let config = FileConfig::config_path()
        .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());

    eprintln!(
        "{}",
        format!(
            "path={} all={} recursive={} human={} json={} config={config}",
            path.display(),
            size_options.include_hidden,
            size_options.recursive,
            display.human,
            display.json,
        )
        .dimmed()
    );
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# path-size configuration
# All values shown are their defaults. Uncomment and change as needed.
# A flag given on the command line always turns the setting on.

# Print sizes with KB/MB/GB/... units (-H, --human)
# human = false

# Include hidden files and directories (-a, --all)
# all = false

# Descend into subdirectories (-r, --recursive)
# recursive = false

# Print a JSON object instead of the size and path (--json)
# json = false

# Print the effective settings to stderr (-v, --verbose)
# verbose = false
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load_from(p)?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a table, showing defaults for unset fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>) -> String {
        val.map_or_else(|| "false  (default)".to_string(), |v| v.to_string())
    }

    format!(
        "\
human     = {human}
all       = {all}
recursive = {recursive}
json      = {json}
verbose   = {verbose}",
        human = show_bool(config.human),
        all = show_bool(config.all),
        recursive = show_bool(config.recursive),
        json = show_bool(config.json),
        verbose = show_bool(config.verbose),
    )
}

/// Write the default config template, unless a config file already exists.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}
