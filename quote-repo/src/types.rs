//! Database row structs.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use quote_types::StoredQuoteRecord;

/// Ledger row from database.
#[derive(FromRow)]
pub struct DbQuoteRecord {
    pub id: i64,
    pub bid: Option<String>,
    pub timestamp: NaiveDateTime,
}

impl DbQuoteRecord {
    pub fn into_domain(self) -> StoredQuoteRecord {
        StoredQuoteRecord {
            id: self.id,
            bid: self.bid.unwrap_or_default(),
            timestamp: self.timestamp,
        }
    }
}
