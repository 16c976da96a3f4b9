//! Line classification: timestamp markers and sender-delimited bodies.
//!
//! Transcript lines come in two shapes:
//!
//! - `[1/27/25, 8:07:58 AM] Alice: Goods From Warehouse to Shop 1` — a new
//!   message with a bracketed timestamp marker and a `Sender: body` split.
//! - `2. Rice: 50kg` — a continuation line belonging to whichever message
//!   came before it.
//!
//! A line that carries a timestamp marker but no recognizable `Sender: body`
//! split is malformed export noise; its timestamp is still captured but the
//! line yields nothing else.

use chrono::NaiveDate;
use regex::Regex;

/// Pattern for the leading timestamp marker.
///
/// Matches `[M/D/YY, H:MM:SS AM|PM]` with two- or four-digit years, e.g.
/// `[1/27/25, 8:07:58 AM]`. The remainder of the line is captured verbatim.
pub const TIMESTAMP_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s?(\d{1,2}:\d{2}:\d{2}\s?[AP]M)\]\s?(.*)$";

/// Date parse formats tried in order against the raw date string.
const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y"];

/// Timestamp fields extracted from a bracketed marker.
///
/// The raw strings are kept exactly as written; the calendar date is parsed
/// once and is `None` when the raw string fits no known format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// Date as written, e.g. `1/27/25`.
    pub date_raw: String,
    /// Time as written, e.g. `8:07:58 AM`.
    pub time: String,
    /// Parsed calendar date, if the raw string was parseable.
    pub date: Option<NaiveDate>,
}

impl Timestamp {
    /// Builds a timestamp from captured date and time strings, parsing the
    /// calendar date eagerly.
    pub fn from_captures(date_raw: impl Into<String>, time: impl Into<String>) -> Self {
        let date_raw = date_raw.into();
        let date = parse_calendar_date(&date_raw);
        Self {
            date_raw,
            time: time.into(),
            date,
        }
    }
}

/// Attempts to parse an `M/D/YY` or `M/D/YYYY` date string.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// The result of classifying one trimmed transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// A new timestamped message with a `Sender: body` split.
    Message {
        /// Timestamp extracted from the bracketed marker.
        timestamp: Timestamp,
        /// Message text after the sender prefix.
        body: String,
    },
    /// A timestamped line without a recognizable sender split. The
    /// timestamp is captured; the rest of the line is discarded.
    Malformed {
        /// Timestamp extracted from the bracketed marker.
        timestamp: Timestamp,
    },
    /// A line with no timestamp marker, passed through verbatim as the body
    /// of whichever message context is current.
    Continuation {
        /// The full line text.
        body: String,
    },
}

/// Classifies one trimmed line using a compiled [`TIMESTAMP_PATTERN`] regex.
///
/// The remainder after the marker must split as `"<sender>: <message>"`;
/// otherwise the line is [`ClassifiedLine::Malformed`].
pub fn classify_line(line: &str, timestamp_re: &Regex) -> ClassifiedLine {
    let Some(caps) = timestamp_re.captures(line) else {
        return ClassifiedLine::Continuation {
            body: line.to_string(),
        };
    };

    let date_raw = caps.get(1).map_or("", |m| m.as_str());
    let time = caps.get(2).map_or("", |m| m.as_str());
    let remainder = caps.get(3).map_or("", |m| m.as_str());
    let timestamp = Timestamp::from_captures(date_raw, time);

    match remainder.split_once(": ") {
        Some((_sender, body)) => ClassifiedLine::Message {
            timestamp,
            body: body.to_string(),
        },
        None => ClassifiedLine::Malformed { timestamp },
    }
}
