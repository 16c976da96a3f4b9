//! Output format writers for the transaction table.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one record per line) - requires `json-output` feature
//!
//! All writers serialize the full normalized table in insertion order, with
//! the columns Date, Time, Source, Destination, Item, Quantity, Unit.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatledger::error::Result<()> {
//! use chatledger::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use chatledger::TransactionRecord;
//!
//! let records = vec![
//!     TransactionRecord::new("Rice", 50, "kg"),
//!     TransactionRecord::new("Sugar", 10, "pcs"),
//! ];
//!
//! // Write to files
//! write_csv(&records, "transactions.csv")?;
//! write_json(&records, "transactions.json")?;
//! write_jsonl(&records, "transactions.jsonl")?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
