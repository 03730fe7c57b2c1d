//! Currency pair tracked by the quote service.

use std::fmt;

use crate::error::DomainError;

/// A currency pair such as `USD-BRL`.
///
/// The provider addresses a pair as `USD-BRL` in its URLs but keys the
/// returned document by the concatenated codes (`USDBRL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Creates a pair from two three-letter currency codes.
    pub fn new(base: &str, quote: &str) -> Result<Self, DomainError> {
        Ok(Self {
            base: parse_code(base)?,
            quote: parse_code(quote)?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Key under which the provider nests this pair's quote.
    pub fn document_key(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self {
            base: "USD".into(),
            quote: "BRL".into(),
        }
    }
}

fn parse_code(code: &str) -> Result<String, DomainError> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidCurrencyCode(code.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

impl std::str::FromStr for CurrencyPair {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidCurrencyPair(s.to_string()))?;
        Self::new(base, quote)
    }
}
