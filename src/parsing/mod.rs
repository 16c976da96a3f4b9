//! Line-level parsing utilities for the extraction engine.
//!
//! The engine scans a transcript line by line. Each line passes through the
//! stages in this module in order:
//!
//! 1. [`line`] — classify the line: timestamped message, malformed
//!    timestamped line, or continuation of the previous message.
//! 2. [`header`] — if the body announces a bulk movement, resolve the
//!    source/destination route.
//! 3. [`context`] — track the currently active movement across lines.
//! 4. [`item`] — while a movement is active, extract (item, quantity, unit)
//!    triples from message bodies.
//!
//! [`crate::parser::TranscriptParser`] wires these stages into a single
//! left fold; nothing in this module holds state between lines.

pub mod context;
pub mod header;
pub mod item;
pub mod line;

pub use context::{ScanState, TransactionContext};
pub use header::{parse_header, HeaderOutcome, MovementHeader};
pub use item::{extract_item, ItemGrammar, ItemLine};
pub use line::{classify_line, ClassifiedLine, Timestamp, TIMESTAMP_PATTERN};
