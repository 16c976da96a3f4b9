//! JSON Lines output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::record::TransactionRecord;

/// Writes records to a JSONL file, one JSON object per line.
///
/// # Format
/// ```json
/// {"RawDate": "1/27/25", "Time": "8:07:58 AM", "Item": "Rice", ...}
/// {"RawDate": "1/27/25", "Time": "8:08:10 AM", "Item": "Sugar", ...}
/// ```
pub fn write_jsonl(records: &[TransactionRecord], output_path: &str) -> Result<()> {
    let jsonl = to_jsonl(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(jsonl.as_bytes())?;
    Ok(())
}

/// Converts records to a JSONL string, one compact object per line.
pub fn to_jsonl(records: &[TransactionRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_jsonl_one_line_per_record() {
        let records = vec![
            TransactionRecord::new("Rice", 50, "kg"),
            TransactionRecord::new("Sugar", 10, "pcs"),
        ];
        let jsonl = to_jsonl(&records).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""Item":"Rice""#));
        assert!(lines[1].contains(r#""Item":"Sugar""#));
    }

    #[test]
    fn test_to_jsonl_empty() {
        assert!(to_jsonl(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_write_jsonl_lines_parse_individually() {
        let records = vec![
            TransactionRecord::new("Rice", 50, "kg"),
            TransactionRecord::new("Sugar", 10, "pcs"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&records, path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        for (line, expected) in content.lines().zip(&records) {
            let parsed: TransactionRecord = serde_json::from_str(line).unwrap();
            assert_eq!(&parsed, expected);
        }
    }
}
