//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options for the CLI
//!
//! The CLI-facing [`OutputFormat`] mirrors [`crate::format::OutputFormat`]
//! and converts into it, keeping clap out of the library types.

use clap::{Parser, ValueEnum};

/// Extract inventory movement transactions from a group-chat transcript
/// into a normalized table.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatledger")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatledger group_chat.txt
    chatledger group_chat.txt -o movements.csv
    chatledger group_chat.txt --format jsonl
    chatledger group_chat.txt --unit bags --unit rolls
    chatledger group_chat.txt --keep-duplicates")]
pub struct Args {
    /// Path to the exported chat transcript
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "transactions.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep exact-duplicate rows instead of removing them
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Extra unit word for the item grammar (repeatable)
    #[arg(long, value_name = "WORD")]
    pub unit: Vec<String>,
}

/// Output format options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
