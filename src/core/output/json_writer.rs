//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::record::TransactionRecord;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"Date": "2025-01-27", "RawDate": "1/27/25", "Time": "8:07:58 AM", ...}
/// ]
/// ```
pub fn write_json(records: &[TransactionRecord], output_path: &str) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing
/// to a file.
pub fn to_json(records: &[TransactionRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
