//! Ledger port trait.
//!
//! Adapters (SQLite, in-memory) implement this to record fetched quotes.

use crate::domain::Quote;
use crate::error::RepoError;

/// Append-only record of fetched quotes.
#[async_trait::async_trait]
pub trait QuoteLedger: Send + Sync + 'static {
    /// Appends one row holding the quote's bid.
    ///
    /// Implementations release any connection they open before returning,
    /// on success and failure alike.
    async fn append(&self, quote: &Quote) -> Result<(), RepoError>;
}
