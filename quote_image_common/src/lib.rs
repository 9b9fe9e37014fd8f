//!
//! Concurrent quote/image fetching shared by the client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteImageError`.
//! - `result` — handy `Result<T, QuoteImageError>` alias.
//! - `net` — endpoint defaults, cache-busting URLs and transport timeout.
//! - `quote` — `Quote`, `ImageBytes` and the combined `QuoteImage`.
//! - `fetch` — the `ImageSource`/`QuoteSource` seams and the HTTP fetcher.
//! - `resolver` — joins one image and one quote fetch, group or paired strategy.
//! - `batch` — runs N resolvers at once and streams finished pairs.
//! - `delivery` — the delivery hook and its channel/callback sinks.
#![warn(missing_docs)]
pub mod batch;
pub mod delivery;
pub mod error;
pub mod fetch;
pub mod net;
pub mod quote;
pub mod resolver;
pub mod result;

#[cfg(test)]
mod fakes;

pub use batch::{BatchOrchestrator, BatchSummary};
pub use delivery::{CallbackSink, ChannelSink, Deliver, FeedEvent};
pub use error::QuoteImageError;
pub use fetch::HttpFetcher;
pub use net::Endpoints;
pub use quote::{ImageBytes, Quote, QuoteImage};
pub use resolver::{PairResolver, ResolveStrategy};
pub use result::Result;
