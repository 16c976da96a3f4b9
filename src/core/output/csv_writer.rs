//! CSV output writer.

use std::fs::File;

use crate::error::Result;
use crate::record::TransactionRecord;

/// Column order of the tabular output.
const HEADER: [&str; 7] = [
    "Date",
    "Time",
    "Source",
    "Destination",
    "Item",
    "Quantity",
    "Unit",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Source`, `Destination`, `Item`, `Quantity`, `Unit`
/// - Date: ISO `YYYY-MM-DD` when parsed, the raw chat string otherwise
/// - Encoding: UTF-8
pub fn write_csv(records: &[TransactionRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_rows(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string. Same format as [`write_csv`].
pub fn to_csv(records: &[TransactionRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_rows(records, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_rows<W: std::io::Write>(
    records: &[TransactionRecord],
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.display_date(),
            record.time.clone(),
            record.source.clone(),
            record.destination.clone(),
            record.item.clone(),
            record.quantity.to_string(),
            record.unit.clone(),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new("Rice", 50, "kg")
                .with_date("1/27/25", NaiveDate::from_ymd_opt(2025, 1, 27))
                .with_time("8:07:58 AM")
                .with_route("Warehouse", "Shop 1"),
            TransactionRecord::new("Sugar", 10, "pcs")
                .with_date("13/45/25", None)
                .with_time("8:08:10 AM")
                .with_route("Warehouse", "Shop 1"),
        ]
    }

    #[test]
    fn test_write_csv_columns() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&sample(), path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.starts_with("Date;Time;Source;Destination;Item;Quantity;Unit"));
        assert!(content.contains("2025-01-27;8:07:58 AM;Warehouse;Shop 1;Rice;50;kg"));
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw() {
        let csv = to_csv(&sample()).unwrap();
        assert!(csv.contains("13/45/25;8:08:10 AM"));
    }

    #[test]
    fn test_to_csv_empty_table_is_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim(), "Date;Time;Source;Destination;Item;Quantity;Unit");
    }
}
