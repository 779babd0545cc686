//! Command line argument parsing for the Wordsmith CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordsmith - suggest alternative wording for text
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsmith")]
#[command(about = "Suggest alternative wording for text from a synonym table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsmithArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Synonym table file (JSON); the built-in table is used when omitted
    #[arg(short, long, value_name = "TABLE_FILE", env = "WORDSMITH_TABLE", global = true)]
    pub table: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsmithArgs {
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
    /// Review text and list suggested alternatives
    Review(ReviewArgs),

    /// Read a line from stdin and choose replacements interactively
    Interactive,

    /// Check the synonym table invariants
    Validate,

    /// Write the active synonym table as JSON
    Export(ExportArgs),
}

/// Arguments for reviewing text
#[derive(Parser, Debug, Clone)]
pub struct ReviewArgs {
    /// Text to review; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for exporting the table
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Destination file
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
