//! Quote Application Service
//!
//! Orchestrates one quote request through the provider and ledger ports.
//! Contains NO infrastructure logic - only sequencing and deadlines.

use std::time::Duration;

use tokio::time::timeout;

use quote_types::{AppError, ProviderError, Quote, QuoteLedger, QuoteProvider, RepoError};

/// Independent deadlines applied to each outbound operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    /// Bound on the whole upstream fetch, from request start to decoded body.
    pub upstream: Duration,
    /// Bound on one ledger append, connection open included.
    pub storage: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            upstream: Duration::from_millis(200),
            storage: Duration::from_millis(10),
        }
    }
}

/// Application service for quote requests.
///
/// Generic over the provider and ledger ports - adapters are injected at
/// compile time. Holds no per-request state, so one instance serves any
/// number of concurrent requests.
pub struct QuoteService<P: QuoteProvider, L: QuoteLedger> {
    provider: P,
    ledger: L,
    deadlines: Deadlines,
}

impl<P: QuoteProvider, L: QuoteLedger> QuoteService<P, L> {
    /// Creates a new quote service with the default deadlines.
    pub fn new(provider: P, ledger: L) -> Self {
        Self::with_deadlines(provider, ledger, Deadlines::default())
    }

    /// Creates a new quote service with custom deadlines.
    pub fn with_deadlines(provider: P, ledger: L, deadlines: Deadlines) -> Self {
        Self {
            provider,
            ledger,
            deadlines,
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a reference to the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn deadlines(&self) -> Deadlines {
        self.deadlines
    }

    /// Fetches one fresh quote, records it, and returns it.
    ///
    /// Upstream failures abort the request. Ledger failures are logged and
    /// never change the outcome: the quote is returned whenever the upstream
    /// fetch succeeded.
    pub async fn latest_quote(&self) -> Result<Quote, AppError> {
        let upstream = self.fetch_upstream().await.inspect_err(|e| {
            tracing::error!("Failed to fetch upstream quote: {}", e);
        })?;

        let quote = Quote::from(upstream);

        // Ignored on purpose: the caller gets the quote whatever the ledger does.
        if let Err(e) = self.record(&quote).await {
            tracing::warn!(bid = %quote, "Failed to record quote: {}", e);
        }

        Ok(quote)
    }

    async fn fetch_upstream(&self) -> Result<quote_types::UpstreamQuote, ProviderError> {
        timeout(self.deadlines.upstream, self.provider.fetch_latest())
            .await
            .map_err(|_| ProviderError::DeadlineExceeded(self.deadlines.upstream))?
    }

    async fn record(&self, quote: &Quote) -> Result<(), RepoError> {
        timeout(self.deadlines.storage, self.ledger.append(quote))
            .await
            .map_err(|_| RepoError::DeadlineExceeded(self.deadlines.storage))?
    }
}
