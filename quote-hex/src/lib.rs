//! # Quote Hex
//!
//! Application service layer and HTTP adapters for the quote service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (fetch, record, respond)
//! - `inbound/` - HTTP adapter (Axum server exposing `/cotacao`)
//! - `outbound/` - HTTP adapter for the upstream quote provider
//!
//! The service is generic over `P: QuoteProvider` and `L: QuoteLedger`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod outbound;
pub mod service;


pub use service::{Deadlines, QuoteService};
