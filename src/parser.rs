//! The chat-to-transaction extraction engine.
//!
//! [`TranscriptParser`] folds a transcript line by line through the stages
//! in [`crate::parsing`]: classify the line, update the movement context,
//! and extract item triples while a movement is active. Each fold step
//! consumes a [`ScanState`] and returns the next state plus at most one
//! record, so the whole scan is a single pass with no shared mutable
//! variables.
//!
//! # Example
//!
//! ```
//! use chatledger::parser::TranscriptParser;
//!
//! let transcript = "\
//! [1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1
//! 1. Rice: 50kg
//! 2. Sugar - 10 ctns";
//!
//! let parser = TranscriptParser::new();
//! let records = parser.parse_str(transcript)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].item, "Rice");
//! assert_eq!(records[0].source, "Warehouse");
//! assert_eq!(records[0].destination, "Shop 1");
//! # Ok::<(), chatledger::ChatledgerError>(())
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::ParserConfig;
use crate::core::dedup::dedup_records;
use crate::error::{ChatledgerError, Result};
use crate::parsing::context::{has_digit, ScanState, TransactionContext};
use crate::parsing::header::{parse_header, HeaderOutcome};
use crate::parsing::item::{extract_item, ItemGrammar, ItemLine};
use crate::parsing::line::{classify_line, ClassifiedLine, Timestamp, TIMESTAMP_PATTERN};
use crate::record::TransactionRecord;

/// Parser for group-chat inventory transcripts.
///
/// The parser itself is stateless between invocations; all scan state lives
/// on the stack of a single `parse` call, so one parser may serve
/// concurrent parses of independent transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatledger::parser::TranscriptParser;
/// use std::path::Path;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse(Path::new("group_chat.txt"))?;
/// # Ok::<(), chatledger::ChatledgerError>(())
/// ```
pub struct TranscriptParser {
    config: ParserConfig,
}

/// Compiled patterns for one parse invocation.
struct Grammar {
    timestamp: Regex,
    item: ItemGrammar,
}

impl Grammar {
    fn build(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            timestamp: Regex::new(TIMESTAMP_PATTERN)
                .map_err(|e| ChatledgerError::invalid_format("timestamp pattern", e.to_string()))?,
            item: ItemGrammar::build(&config.extra_units)?,
        })
    }
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file into the normalized transaction table.
    ///
    /// # Errors
    ///
    /// Fails only on invocation-level problems (unreadable file, invalid
    /// configuration). Malformed chat content never fails; it yields fewer
    /// records, down to an empty table.
    pub fn parse(&self, path: &Path) -> Result<Vec<TransactionRecord>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses in-memory transcript text into the normalized table.
    pub fn parse_str(&self, content: &str) -> Result<Vec<TransactionRecord>> {
        let grammar = Grammar::build(&self.config)?;

        let mut state = ScanState::default();
        let mut records: Vec<TransactionRecord> = Vec::new();

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (next_state, record) = step(&grammar, state, line);
            state = next_state;
            if let Some(record) = record {
                records.push(record);
            }
        }

        if self.config.dedupe {
            Ok(dedup_records(records))
        } else {
            Ok(records)
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One fold step: consumes the scan state and one trimmed line, returns the
/// next state and at most one extracted record.
fn step(
    grammar: &Grammar,
    state: ScanState,
    line: &str,
) -> (ScanState, Option<TransactionRecord>) {
    match classify_line(line, &grammar.timestamp) {
        // Timestamp captured; nothing else about the line is usable.
        ClassifiedLine::Malformed { timestamp } => {
            (ScanState::advanced(timestamp, state.context), None)
        }

        ClassifiedLine::Message { timestamp, body } => match parse_header(&body) {
            HeaderOutcome::Movement(header) => (
                ScanState::advanced(timestamp, TransactionContext::activated(header)),
                None,
            ),
            HeaderOutcome::Negated => (
                ScanState::advanced(timestamp, state.context.deactivated()),
                None,
            ),
            HeaderOutcome::NotAHeader if state.context.active => {
                if has_digit(&body) {
                    // Still itemizing the same batch
                    let record = extract_item(&body, &grammar.item)
                        .map(|item| build_record(item, &timestamp, &state.context));
                    (ScanState::advanced(timestamp, state.context), record)
                } else {
                    // A digitless reply ends the running item list
                    (
                        ScanState::advanced(timestamp, state.context.deactivated()),
                        None,
                    )
                }
            }
            HeaderOutcome::NotAHeader => (ScanState::advanced(timestamp, state.context), None),
        },

        ClassifiedLine::Continuation { body } => {
            if !state.context.active {
                return (state, None);
            }
            let record = state.timestamp.as_ref().and_then(|ts| {
                extract_item(&body, &grammar.item).map(|item| build_record(item, ts, &state.context))
            });
            (state, record)
        }
    }
}

/// Tags an extracted item with the timestamp and context active at match
/// time.
fn build_record(
    item: ItemLine,
    timestamp: &Timestamp,
    context: &TransactionContext,
) -> TransactionRecord {
    TransactionRecord::new(item.name, item.quantity, item.unit)
        .with_date(timestamp.date_raw.clone(), timestamp.date)
        .with_time(timestamp.time.clone())
        .with_route(context.source.clone(), context.destination.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<TransactionRecord> {
        TranscriptParser::new().parse_str(content).unwrap()
    }

    #[test]
    fn test_header_then_items() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             1. Rice: 50kg\n\
             2. Sugar - 10 ctns",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item, "Rice");
        assert_eq!(records[0].quantity, 50);
        assert_eq!(records[0].unit, "kg");
        assert_eq!(records[0].source, "Warehouse");
        assert_eq!(records[0].destination, "Shop 1");
        assert_eq!(records[0].date_raw, "1/27/25");
        assert_eq!(records[0].time, "8:07:58 AM");
        assert_eq!(records[1].item, "Sugar");
    }

    #[test]
    fn test_items_without_header_are_ignored() {
        let records = parse("1. Rice: 50kg\n2. Sugar: 10");
        assert!(records.is_empty());
    }

    #[test]
    fn test_needed_header_yields_nothing() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods Needed at Shop 1\n\
             1. Rice: 50kg\n\
             2. Sugar: 10",
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_digitless_reply_closes_context() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             1. Rice: 50kg\n\
             [1/27/25, 8:10:00 AM] Bob: thanks, received\n\
             2. Sugar: 10",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, "Rice");
    }

    #[test]
    fn test_digit_bearing_message_extends_batch() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             [1/27/25, 8:08:10 AM] Alice: Rice: 50kg\n\
             [1/27/25, 8:08:30 AM] Alice: Sugar: 10",
        );
        assert_eq!(records.len(), 2);
        // The record carries the timestamp of its own message line
        assert_eq!(records[0].time, "8:08:10 AM");
        assert_eq!(records[1].time, "8:08:30 AM");
    }

    #[test]
    fn test_duplicate_lines_are_deduplicated() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             1. Rice: 50kg\n\
             1. Rice: 50kg",
        );
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_dedup_can_be_disabled() {
        let parser =
            TranscriptParser::with_config(ParserConfig::new().with_dedupe(false));
        let records = parser
            .parse_str(
                "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
                 1. Rice: 50kg\n\
                 1. Rice: 50kg",
            )
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_new_header_overwrites_context() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             1. Rice: 50kg\n\
             [1/27/25, 9:00:00 AM] Alice: Goods From Store 4 to Shop 2\n\
             1. Rice: 50kg",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].destination, "Shop 1");
        assert_eq!(records[1].destination, "Shop 2");
        assert_eq!(records[1].source, "Store 4");
    }

    #[test]
    fn test_offloaded_header() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods Offloaded\n\
             1. Cement: 100 packs",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "Container/External");
        assert_eq!(records[0].destination, "Unknown");
    }

    #[test]
    fn test_malformed_timestamp_line_skipped_without_state_change() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             [1/27/25, 8:08:00 AM] garbled line without separator\n\
             1. Rice: 50kg",
        );
        // Context stayed active; the record picks up the captured timestamp
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, "8:08:00 AM");
    }

    #[test]
    fn test_empty_transcript_yields_empty_table() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }

    #[test]
    fn test_plain_conversation_yields_empty_table() {
        let records = parse(
            "[1/27/25, 8:07:58 AM] Alice: good morning\n\
             [1/27/25, 8:08:00 AM] Bob: morning!",
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_unparseable_date_keeps_raw_string() {
        let records = parse(
            "[13/45/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
             1. Rice: 50kg",
        );
        assert_eq!(records.len(), 1);
        assert!(records[0].date.is_none());
        assert_eq!(records[0].date_raw, "13/45/25");
    }

    #[test]
    fn test_extra_units_flow_through_config() {
        let parser = TranscriptParser::with_config(
            ParserConfig::new().with_extra_unit("bags"),
        );
        let records = parser
            .parse_str(
                "[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1\n\
                 1. Rice: 50 bags",
            )
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].unit, "bags");
    }

    #[test]
    fn test_invalid_extra_unit_is_an_error() {
        let parser = TranscriptParser::with_config(
            ParserConfig::new().with_extra_unit("50cal"),
        );
        assert!(parser.parse_str("anything").is_err());
    }
}
