use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::report::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lintsweep")]
#[command(author, version, about = "Recursive lint runner with per-file reports")]
#[command(long_about = "Runs a lint checker over files and directory trees.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Lint errors found\n  \
    2 - Configuration or runtime error\n  \
    3 - Checker unavailable")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files and directory trees once
    Check(CheckArgs),

    /// Watch a file and recheck it on every change
    Watch(WatchArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to an options file (JSON, or TOML by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Checker options to force on (can be specified multiple times)
    #[arg(long)]
    pub enable: Vec<String>,

    /// Checker options to force off (can be specified multiple times)
    #[arg(long)]
    pub disable: Vec<String>,

    /// Stop each file's check after this many warnings
    #[arg(long)]
    pub max_errors: Option<usize>,

    /// Maximum allowed line length
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Predefined global identifiers (comma-separated)
    #[arg(long = "global", value_delimiter = ',')]
    pub globals: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Save an HTML report per file instead of printing to the console
    #[arg(long)]
    pub html: bool,

    /// Save run totals to the summary CSV
    #[arg(long)]
    pub summary: bool,

    /// Prefix console findings with the file path
    #[arg(long)]
    pub show_path: bool,
}

#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// File to watch
    pub path: PathBuf,

    /// Path to an options file (JSON, or TOML by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Checker options to force on (can be specified multiple times)
    #[arg(long)]
    pub enable: Vec<String>,

    /// Checker options to force off (can be specified multiple times)
    #[arg(long)]
    pub disable: Vec<String>,

    /// Stop each file's check after this many warnings
    #[arg(long)]
    pub max_errors: Option<usize>,

    /// Maximum allowed line length
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Predefined global identifiers (comma-separated)
    #[arg(long = "global", value_delimiter = ',')]
    pub globals: Vec<String>,

    /// Prefix console findings with the file path
    #[arg(long)]
    pub show_path: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
