//! Upstream quote provider over HTTP.

use async_trait::async_trait;
use reqwest::Client;

use quote_types::{CurrencyPair, ProviderError, QuoteProvider, UpstreamQuote, UpstreamQuoteDocument};

/// AwesomeAPI endpoint for the latest USD-BRL quote.
pub const DEFAULT_PROVIDER_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Fetches the latest quote document from an HTTP endpoint.
///
/// Applies no deadline of its own; callers bound each call.
pub struct HttpQuoteProvider {
    url: String,
    pair: CurrencyPair,
    http: Client,
}

impl HttpQuoteProvider {
    /// Creates a provider for `pair` served at `url`.
    pub fn new(url: impl Into<String>, pair: CurrencyPair) -> Self {
        Self {
            url: url.into(),
            pair,
            http: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    #[tracing::instrument(skip(self), fields(pair = %self.pair))]
    async fn fetch_latest(&self) -> Result<UpstreamQuote, ProviderError> {
        let request = self
            .http
            .get(&self.url)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!("HTTP {}", status)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let mut document: UpstreamQuoteDocument =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(document.take(&self.pair))
    }
}
