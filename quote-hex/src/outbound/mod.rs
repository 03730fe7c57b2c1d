//! HTTP Outbound Adapter
//!
//! Reqwest-based client for the upstream quote provider.

mod provider;

pub use provider::{DEFAULT_PROVIDER_URL, HttpQuoteProvider};
