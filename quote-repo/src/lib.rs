//! # Quote Repository
//!
//! Ledger adapter for the quote service.
//! This crate provides the SQLite implementation of the `QuoteLedger` port.

pub mod sqlite;

mod types;


pub use sqlite::SqliteLedger;

/// Build a ledger for the database at `path` and run the schema migration.
///
/// # Examples
///
/// ```ignore
/// let ledger = build_ledger("storage/cotation.db").await?;
/// ```
pub async fn build_ledger(path: impl AsRef<std::path::Path>) -> anyhow::Result<SqliteLedger> {
    let ledger = SqliteLedger::new(path).await?;
    ledger.init_schema().await?;
    Ok(ledger)
}
