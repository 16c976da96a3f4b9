//! Core functionality: deduplication and output writers.
//!
//! # Submodules
//!
//! - [`dedup`] — duplicate-row removal for the output table
//! - [`output`] — CSV/JSON/JSONL writers (feature-gated)

pub mod dedup;
pub mod output;

pub use dedup::{dedup_records, dedup_with_stats, DedupStats};
