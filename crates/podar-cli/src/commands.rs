//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Podador: CLI for Podar - prunes suppressed coverage records from LCOV traces
#[derive(Parser, Debug)]
#[command(name = "podador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a coverage trace, dropping suppressed DA/BRDA records
    ///
    /// Reads an LCOV-style trace from stdin (or --input), looks up each
    /// DA/BRDA record's source line in the file named by the most recent
    /// SF record, and omits the record when the line contains a
    /// suppression pattern. Everything else is passed through verbatim.
    Trim(TrimArgs),

    /// Show the active suppression rule sets
    Rules(RulesArgs),
}

/// Arguments for the trim command
#[derive(Parser, Debug)]
pub struct TrimArgs {
    /// Trace file to read (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Filtered trace file to write (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print run statistics as JSON to stderr
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the rules command
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: RulesFormat,
}

/// Rules output format
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum RulesFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
