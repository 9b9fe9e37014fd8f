//! Error types shared by the fetchers, resolvers and the batch orchestrator.
//!
//! The `QuoteImageError` enum unifies the failure cases of a single fetch
//! (endpoint, transport, decode) with the task-level failures of the
//! concurrency layer, so every stage can propagate one error type.
use thiserror::Error;

/// Unified error type for the quote/image pipeline.
#[derive(Error, Debug)]
pub enum QuoteImageError {
    /// Endpoint URL could not be constructed or parsed.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport failure or non-success HTTP status on a single fetch.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The quote response decoded but contained no entries.
    #[error("Quote response contained no entries")]
    EmptyResult,

    /// The response body did not match the expected structure.
    #[error("Decode failed: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    /// A spawned fetch or resolver task panicked or was aborted.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// Batch size must be at least one.
    #[error("Invalid batch amount: {0}")]
    InvalidAmount(usize),
}

impl From<reqwest::Error> for QuoteImageError {
    fn from(err: reqwest::Error) -> Self {
        QuoteImageError::FetchFailed(err.to_string())
    }
}

impl From<tokio::task::JoinError> for QuoteImageError {
    fn from(err: tokio::task::JoinError) -> Self {
        QuoteImageError::TaskFailed(err.to_string())
    }
}
