//! Duplicate-row removal for the output table.
//!
//! Chat groups re-paste delivery lists and re-forward whole message blocks;
//! without guarding, each paste would double the reported stock movement.
//! A row is a duplicate only when *every* field matches an earlier row,
//! including the time, so legitimately repeated deliveries sent at
//! different times survive.

use std::collections::HashSet;

use crate::record::TransactionRecord;

/// Removes rows whose full field tuple duplicates an earlier row,
/// preserving first-occurrence order.
///
/// Idempotent: deduplicating an already-deduplicated table is a no-op.
///
/// # Example
///
/// ```
/// use chatledger::core::dedup::dedup_records;
/// use chatledger::TransactionRecord;
///
/// let rec = TransactionRecord::new("Rice", 50, "kg");
/// let table = dedup_records(vec![rec.clone(), rec.clone()]);
/// assert_eq!(table.len(), 1);
/// ```
pub fn dedup_records(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    let mut seen: HashSet<TransactionRecord> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// Statistics about a deduplication pass.
#[derive(Debug, Clone, Copy)]
pub struct DedupStats {
    /// Row count before deduplication.
    pub original_count: usize,
    /// Row count after deduplication.
    pub unique_count: usize,
}

impl DedupStats {
    /// Share of rows removed as duplicates, in percent.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.unique_count as f64 / self.original_count as f64)) * 100.0
    }
}

/// Deduplicates and reports how much was removed.
pub fn dedup_with_stats(records: Vec<TransactionRecord>) -> (Vec<TransactionRecord>, DedupStats) {
    let original_count = records.len();
    let unique = dedup_records(records);
    let stats = DedupStats {
        original_count,
        unique_count: unique.len(),
    };
    (unique, stats)
}
