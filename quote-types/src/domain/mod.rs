//! Domain models for the quote service.

pub mod pair;
pub mod quote;
pub mod record;
pub mod upstream;

pub use pair::CurrencyPair;
pub use quote::Quote;
pub use record::StoredQuoteRecord;
pub use upstream::{UpstreamQuote, UpstreamQuoteDocument};
