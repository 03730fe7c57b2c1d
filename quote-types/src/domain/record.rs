//! Persisted ledger row.

use chrono::NaiveDateTime;

/// One row of the `cotation` ledger.
///
/// `id` and `timestamp` are assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredQuoteRecord {
    pub id: i64,
    pub bid: String,
    pub timestamp: NaiveDateTime,
}
