//! Document shape returned by the upstream quote provider.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::pair::CurrencyPair;

/// Market data for one currency pair.
///
/// Only `bid` is used by the service; the other fields are carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    #[serde(rename = "timeStamp")]
    pub timestamp: String,
    pub create_date: String,
}

/// Full provider response, keyed by the pair's document key (e.g. `USDBRL`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamQuoteDocument(HashMap<String, UpstreamQuote>);

impl UpstreamQuoteDocument {
    /// Removes and returns the quote for `pair`.
    ///
    /// An absent pair yields an all-empty quote, the same as a pair whose
    /// fields are all missing.
    pub fn take(&mut self, pair: &CurrencyPair) -> UpstreamQuote {
        self.0.remove(&pair.document_key()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.4612",
            "low": "5.4012",
            "varBid": "0.0123",
            "pctChange": "0.23",
            "bid": "5.43",
            "ask": "5.4312",
            "timeStamp": "1700000000",
            "create_date": "2023-11-14 19:13:20"
        }
    }"#;

    #[test]
    fn test_decode_document() {
        let mut doc: UpstreamQuoteDocument = serde_json::from_str(DOCUMENT).unwrap();
        let quote = doc.take(&CurrencyPair::default());

        assert_eq!(quote.bid, "5.43");
        assert_eq!(quote.var_bid, "0.0123");
        assert_eq!(quote.create_date, "2023-11-14 19:13:20");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let mut doc: UpstreamQuoteDocument =
            serde_json::from_str(r#"{"USDBRL": {"ask": "5.44"}}"#).unwrap();
        let quote = doc.take(&CurrencyPair::default());

        assert_eq!(quote.bid, "");
    }

    #[test]
    fn test_absent_pair_yields_empty_quote() {
        let mut doc: UpstreamQuoteDocument = serde_json::from_str(DOCUMENT).unwrap();
        let eur: CurrencyPair = "EUR-BRL".parse().unwrap();

        assert_eq!(doc.take(&eur), UpstreamQuote::default());
    }

    #[test]
    fn test_empty_document_yields_empty_bid() {
        let mut doc: UpstreamQuoteDocument = serde_json::from_str("{}").unwrap();

        assert_eq!(doc.take(&CurrencyPair::default()).bid, "");
    }
}
