//! Command line argument parsing for the Quiver CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Quiver - prefix autocompletion over structured records
#[derive(Parser, Debug, Clone)]
#[command(name = "quiver")]
#[command(about = "Prefix autocompletion over structured records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuiverArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Completion configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "QUIVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuiverArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Complete one or more prefixes against a field of the given records
    Complete(CompleteArgs),

    /// Show per-field word counts
    Stats(StatsArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments for completing prefixes
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Record file path (JSONL)
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Field to complete
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Prefixes to complete
    #[arg(value_name = "PREFIX", required = true, num_args = 1..)]
    pub prefixes: Vec<String>,

    /// Override the completer flavor for this field
    #[arg(short, long)]
    pub kind: Option<KindArg>,

    /// Maximum number of completions to show per prefix
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for field statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Record file path (JSONL)
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Fields to report (default: every field present in the records)
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,
}

/// Completer flavors selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindArg {
    /// Each word of the field value
    Word,
    /// The whole field value
    EntireField,
    /// Names in a person list
    Name,
    /// Record citation keys
    Key,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
