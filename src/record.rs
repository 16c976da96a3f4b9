//! Normalized transaction record extracted from a chat transcript.
//!
//! This module provides [`TransactionRecord`], the row type of the engine's
//! output table. Every accepted item line becomes exactly one record, tagged
//! with the movement context and timestamp that were active when the line
//! was matched.
//!
//! # Overview
//!
//! A record consists of:
//! - **When**: `date` (parsed calendar date, `None` if unparseable),
//!   `date_raw` (the date string as it appeared in the chat) and `time`
//! - **Where**: `source` and `destination` location names
//! - **What**: `item`, `quantity` and `unit`
//!
//! # Examples
//!
//! ```
//! use chatledger::TransactionRecord;
//!
//! let rec = TransactionRecord::new("Rice", 50, "kg");
//! assert_eq!(rec.item(), "Rice");
//! assert_eq!(rec.quantity(), 50);
//! assert_eq!(rec.unit(), "kg");
//! assert_eq!(rec.source(), "Unknown");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatledger::TransactionRecord;
//!
//! let rec = TransactionRecord::new("Rice", 50, "kg");
//! let json = serde_json::to_string(&rec)?;
//! let parsed: TransactionRecord = serde_json::from_str(&json)?;
//!
//! assert_eq!(rec, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default location name when a header did not resolve one.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Source name used for "Goods Offloaded" headers with no explicit origin.
pub const EXTERNAL_SOURCE: &str = "Container/External";

/// Default unit when an item line carries none.
pub const DEFAULT_UNIT: &str = "pcs";

/// One normalized stock movement: an item moved from a source location to a
/// destination location at a point in time.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `Option<NaiveDate>` | Calendar date, `None` when the raw date didn't parse |
/// | `date_raw` | `String` | Date exactly as written in the transcript |
/// | `time` | `String` | Time exactly as written in the transcript |
/// | `source` | `String` | Origin location, `"Unknown"` or `"Container/External"` when unresolved |
/// | `destination` | `String` | Target location, `"Unknown"` when unresolved |
/// | `item` | `String` | Item name |
/// | `quantity` | `u64` | Non-negative quantity |
/// | `unit` | `String` | Lowercase unit word, `"pcs"` by default |
///
/// # Identity
///
/// Records derive `Eq` and `Hash` over the full field tuple; the
/// deduplicator treats two records as the same delivery only when every
/// field matches. Records are immutable after creation by convention: the
/// engine builds them once and never mutates rows in the output table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRecord {
    /// Parsed calendar date; `None` keeps the record out of date-keyed
    /// aggregation without dropping it from the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Date string as captured from the timestamp marker, e.g. `1/27/25`.
    #[serde(rename = "RawDate")]
    pub date_raw: String,

    /// Time string as captured from the timestamp marker, e.g. `8:07:58 AM`.
    pub time: String,

    /// Origin location of the movement.
    pub source: String,

    /// Target location of the movement.
    pub destination: String,

    /// Item name, trimmed of list numbering and separators.
    pub item: String,

    /// Parsed quantity. Always non-negative by construction.
    pub quantity: u64,

    /// Unit word, lowercased, from the unit vocabulary or `"pcs"`.
    pub unit: String,
}

impl TransactionRecord {
    /// Creates a record with only the item fields set.
    ///
    /// Timestamp fields are empty and locations default to `"Unknown"`.
    /// Use the builder methods to attach context.
    pub fn new(item: impl Into<String>, quantity: u64, unit: impl Into<String>) -> Self {
        Self {
            date: None,
            date_raw: String::new(),
            time: String::new(),
            source: UNKNOWN_LOCATION.to_string(),
            destination: UNKNOWN_LOCATION.to_string(),
            item: item.into(),
            quantity,
            unit: unit.into(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to set the raw and parsed date.
    #[must_use]
    pub fn with_date(mut self, raw: impl Into<String>, parsed: Option<NaiveDate>) -> Self {
        self.date_raw = raw.into();
        self.date = parsed;
        self
    }

    /// Builder method to set the time string.
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Builder method to set source and destination.
    #[must_use]
    pub fn with_route(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.source = source.into();
        self.destination = destination.into();
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the parsed calendar date, if available.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the raw date string.
    pub fn date_raw(&self) -> &str {
        &self.date_raw
    }

    /// Returns the raw time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the source location.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the destination location.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the item name.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the unit word.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns the date column as displayed in tabular output: the parsed
    /// ISO date when available, the raw string otherwise.
    pub fn display_date(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => self.date_raw.clone(),
        }
    }

    /// Returns `true` if neither source nor destination was resolved.
    pub fn is_unrouted(&self) -> bool {
        self.source == UNKNOWN_LOCATION && self.destination == UNKNOWN_LOCATION
    }
}
