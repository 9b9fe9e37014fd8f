//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `QuoteImageError`, so functions can simply
//! return `Result<T>`.
use crate::error::QuoteImageError;

/// Workspace-wide `Result` alias with `QuoteImageError` as the default error.
pub type Result<T, E = QuoteImageError> = std::result::Result<T, E>;
