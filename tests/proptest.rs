//! Property-based tests for chatledger.
//!
//! These tests generate random inputs to find edge cases in the extraction
//! engine and the deduplicator.

use proptest::prelude::*;

use chatledger::prelude::*;

/// Generate a random TransactionRecord using fast strategies (no regex!)
fn arb_record() -> impl Strategy<Value = TransactionRecord> {
    (
        prop::sample::select(vec![
            "Rice".to_string(),
            "Sugar".to_string(),
            "Cooking Oil".to_string(),
            "Maize Flour".to_string(),
            "Мука".to_string(),
        ]),
        0u64..1000,
        prop::sample::select(vec![
            "pcs".to_string(),
            "kg".to_string(),
            "ctns".to_string(),
            "packs".to_string(),
        ]),
        prop::sample::select(vec![
            "8:00:00 AM".to_string(),
            "9:30:00 AM".to_string(),
            "1:15:45 PM".to_string(),
        ]),
    )
        .prop_map(|(item, quantity, unit, time)| {
            TransactionRecord::new(item, quantity, unit).with_time(time)
        })
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

/// Generate random transcript lines mixing headers, items and noise.
fn arb_transcript() -> impl Strategy<Value = String> {
    let line = prop::sample::select(vec![
        "[1/27/25, 8:07:58 AM] Mary: Goods From Warehouse to Shop 1".to_string(),
        "[1/27/25, 8:30:00 AM] Mary: Goods to Shop 2 from Store 4".to_string(),
        "[1/27/25, 8:45:00 AM] John: Goods Needed at Shop 1".to_string(),
        "[1/27/25, 9:00:00 AM] John: ok received".to_string(),
        "[1/27/25, 9:05:00 AM] John: give me 10 mins".to_string(),
        "1. Rice: 50kg".to_string(),
        "2. Sugar - 10 ctns".to_string(),
        "Beans 25".to_string(),
        "random chatter".to_string(),
        "This message was deleted".to_string(),
        "[garbled line".to_string(),
        String::new(),
    ]);
    prop::collection::vec(line, 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // DEDUP PROPERTIES
    // ============================================

    /// Dedup never increases row count
    #[test]
    fn dedup_never_increases_count(records in arb_records(20)) {
        let original_len = records.len();
        let unique = dedup_records(records);
        prop_assert!(unique.len() <= original_len);
    }

    /// Dedup is idempotent: a deduplicated table is a fixed point
    #[test]
    fn dedup_is_idempotent(records in arb_records(20)) {
        let once = dedup_records(records);
        let twice = dedup_records(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// Dedup preserves the set of distinct rows
    #[test]
    fn dedup_preserves_distinct_rows(records in arb_records(20)) {
        use std::collections::HashSet;
        let before: HashSet<TransactionRecord> = records.iter().cloned().collect();
        let after: HashSet<TransactionRecord> = dedup_records(records).into_iter().collect();
        prop_assert_eq!(before, after);
    }

    /// Doubling a table changes nothing after dedup
    #[test]
    fn dedup_ignores_doubled_input(records in arb_records(10)) {
        let mut doubled = records.clone();
        doubled.extend(records.clone());
        prop_assert_eq!(dedup_records(doubled), dedup_records(records));
    }

    // ============================================
    // ENGINE PROPERTIES
    // ============================================

    /// The engine never fails on arbitrary transcript text
    #[test]
    fn engine_never_errors_on_noise(content in "\\PC{0,200}") {
        let parser = TranscriptParser::new();
        prop_assert!(parser.parse_str(&content).is_ok());
    }

    /// Every record respects the output schema invariants
    #[test]
    fn records_respect_schema(transcript in arb_transcript()) {
        let vocabulary = [
            "pcs", "ctns", "sets", "dozens", "packs", "pc", "ctn", "set",
            "dozen", "pack", "kg", "g", "l",
        ];
        let records = TranscriptParser::new().parse_str(&transcript).unwrap();
        for record in &records {
            prop_assert!(vocabulary.contains(&record.unit.as_str()));
            prop_assert!(record.item.chars().count() > 1);
            prop_assert!(!record.item.contains(" on "));
            prop_assert!(!record.time.is_empty());
        }
    }

    /// The engine's output is already deduplicated by default
    #[test]
    fn default_output_is_a_dedup_fixed_point(transcript in arb_transcript()) {
        let records = TranscriptParser::new().parse_str(&transcript).unwrap();
        prop_assert_eq!(dedup_records(records.clone()), records);
    }

    /// Items never appear without a preceding activating header
    #[test]
    fn no_records_without_headers(lines in prop::collection::vec(
        prop::sample::select(vec![
            "1. Rice: 50kg".to_string(),
            "[1/27/25, 9:00:00 AM] John: ok received".to_string(),
            "[1/27/25, 9:05:00 AM] John: Goods Needed at Shop 1".to_string(),
            "Beans 25".to_string(),
        ]), 0..20)
    ) {
        let transcript = lines.join("\n");
        let records = TranscriptParser::new().parse_str(&transcript).unwrap();
        prop_assert!(records.is_empty());
    }
}
