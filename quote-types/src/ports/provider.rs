//! Upstream quote provider port.

use crate::domain::UpstreamQuote;
use crate::error::ProviderError;

/// Source of fresh quotes for the configured currency pair.
///
/// Each call is exactly one upstream attempt. Implementations must not
/// cache results across calls.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync + 'static {
    /// Fetches the latest market data for the tracked pair.
    async fn fetch_latest(&self) -> Result<UpstreamQuote, ProviderError>;
}
