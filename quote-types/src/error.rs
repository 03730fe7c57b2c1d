//! Error types for the quote service.

use std::time::Duration;

/// Domain-level errors (invalid values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Invalid currency pair: {0:?} (expected BASE-QUOTE, e.g. USD-BRL)")]
    InvalidCurrencyPair(String),
}

/// Upstream provider errors.
///
/// A missed deadline is reported as an ordinary variant; callers that need
/// to tell "down" from "slow" match on it.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid upstream request: {0}")]
    Request(String),

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

/// Repository-level errors (ledger access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// Application-level errors (for HTTP responses).
///
/// Every failure of the request path is an internal error; there is no
/// finer taxonomy exposed to callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Internal(err.to_string())
    }
}
