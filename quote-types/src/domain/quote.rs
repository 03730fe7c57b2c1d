//! Quote domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::upstream::UpstreamQuote;

/// The bid of the tracked currency pair, as exchanged between server and client.
///
/// The bid is kept as the provider's decimal text. No numeric validation
/// is applied, so an empty or malformed value passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    bid: String,
}

impl Quote {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }

    /// Returns the bid text.
    pub fn bid(&self) -> &str {
        &self.bid
    }
}

impl From<UpstreamQuote> for Quote {
    fn from(upstream: UpstreamQuote) -> Self {
        Self { bid: upstream.bid }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bid)
    }
}
