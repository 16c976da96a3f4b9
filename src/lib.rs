//! # Chatledger
//!
//! A Rust library for turning exported group-chat transcripts that describe
//! informal inventory movements into a normalized table of discrete
//! transactions.
//!
//! ## Overview
//!
//! Small businesses often track stock moves by chat rather than structured
//! entry:
//!
//! ```text
//! [1/27/25, 8:07:58 AM] Mary: Goods From Warehouse to Shop 1
//! 1. Rice: 50kg
//! 2. Sugar - 10 ctns
//! [1/27/25, 8:15:00 AM] John: received, thanks
//! ```
//!
//! Chatledger scans such a transcript line by line, tracks which movement
//! is currently being itemized, extracts (item, quantity, unit) triples
//! under the conventions people actually type, and removes duplicate rows
//! caused by re-pasted delivery lists. The result is an ordered table of
//! [`TransactionRecord`]s ready for reporting or stock-balance computation.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatledger::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! [1/27/25, 8:07:58 AM] Mary: Goods From Warehouse to Shop 1
//! 1. Rice: 50kg";
//!
//!     let parser = TranscriptParser::new();
//!     let records = parser.parse_str(transcript)?;
//!
//!     assert_eq!(records[0].item, "Rice");
//!     assert_eq!(records[0].quantity, 50);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the extraction engine
//!   - [`TranscriptParser`](parser::TranscriptParser) — parse files or strings
//! - [`parsing`] — the engine's stages
//!   - [`parsing::line`] — timestamp marker and sender/body classification
//!   - [`parsing::header`] — "Goods From X to Y" route resolution
//!   - [`parsing::context`] — the rolling movement context
//!   - [`parsing::item`] — item/quantity/unit grammar
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`record`] — [`TransactionRecord`], the output row type
//! - [`core`] — deduplication ([`core::dedup`]) and writers ([`core::output`])
//! - [`format`] — [`OutputFormat`](format::OutputFormat), [`write_to_format`](format::write_to_format)
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`ChatledgerError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatledgerError, Result};
pub use parser::TranscriptParser;
pub use record::TransactionRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatledger::prelude::*;
/// ```
pub mod prelude {
    // Output row type
    pub use crate::TransactionRecord;

    // Error types
    pub use crate::error::{ChatledgerError, Result};

    // The engine
    pub use crate::parser::TranscriptParser;

    // Configuration
    pub use crate::config::ParserConfig;

    // Deduplication
    pub use crate::core::dedup::{dedup_records, dedup_with_stats, DedupStats};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{write_to_format, OutputFormat};
}
