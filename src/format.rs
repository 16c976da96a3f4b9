//! Output format types for the chatledger library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks, plus [`write_to_format`] for dispatching to the writers in
//! [`crate::core::output`].
//!
//! # Example
//!
//! ```rust
//! use chatledger::format::OutputFormat;
//! use std::str::FromStr;
//!
//! let format = OutputFormat::from_str("jsonl").unwrap();
//! assert_eq!(format, OutputFormat::Jsonl);
//! assert_eq!(format.extension(), "jsonl");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatledgerError, Result};
use crate::record::TransactionRecord;

/// Output format for the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default; opens directly in spreadsheets)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects the format from a file path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatledgerError::InvalidFormat`] for unknown extensions.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        ext.parse().map_err(|_| {
            ChatledgerError::invalid_format(
                "output path",
                format!(
                    "unknown extension '{ext}'; expected one of: {}",
                    Self::all_names().join(", ")
                ),
            )
        })
    }
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

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the transaction table to a file in the given format.
///
/// # Errors
///
/// Returns [`ChatledgerError::InvalidFormat`] when support for the format
/// was not compiled in, otherwise propagates writer errors.
pub fn write_to_format(
    records: &[TransactionRecord],
    output_path: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, output_path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, output_path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, output_path),
        #[allow(unreachable_patterns)]
        other => Err(ChatledgerError::invalid_format(
            "output format",
            format!("{other} support was not compiled in"),
        )),
    }
}
