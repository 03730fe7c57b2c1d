//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete implementations.

mod ledger;
mod provider;

pub use ledger::QuoteLedger;
pub use provider::QuoteProvider;
