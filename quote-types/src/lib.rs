//! # Quote Types
//!
//! Domain types and port traits for the quote service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Quote, CurrencyPair, upstream document, ledger row)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain, provider, repository and application error types

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{CurrencyPair, Quote, StoredQuoteRecord, UpstreamQuote, UpstreamQuoteDocument};
pub use error::{AppError, DomainError, ProviderError, RepoError};
pub use ports::{QuoteLedger, QuoteProvider};
