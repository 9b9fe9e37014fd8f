//! Endpoint configuration shared by the fetchers and the client.
//!
//! The image endpoint is cache-busted: every call to
//! [`Endpoints::random_image_url`] appends a fresh UUID v4 so consecutive
//! requests are never served the same cached picture. The quote endpoint is
//! fixed.
use std::time::Duration;

use reqwest::Url;
use uuid::Uuid;

use crate::error::QuoteImageError;
use crate::result::Result;

/// Default endpoint serving a random 200x200 image.
pub const IMAGE_URL: &str = "https://picsum.photos/200";
/// Default endpoint serving a JSON array with one random quote.
pub const QUOTE_URL: &str = "https://zenquotes.io/api/random";
/// Query parameter carrying the cache-busting token.
pub const CACHE_BUST_PARAM: &str = "uuid";
/// Per-request transport timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where and how the HTTP fetcher talks to the network.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base image URL; a fresh `uuid` query parameter is appended per call.
    pub image_url: String,
    /// Fixed quote URL.
    pub quote_url: String,
    /// Transport timeout applied to every request.
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            image_url: String::from(IMAGE_URL),
            quote_url: String::from(QUOTE_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Endpoints {
    /// Build the image URL with a newly generated cache-busting token.
    pub fn random_image_url(&self) -> Result<Url> {
        let mut url = parse_http_url(&self.image_url)?;
        url.query_pairs_mut()
            .append_pair(CACHE_BUST_PARAM, &Uuid::new_v4().to_string());
        Ok(url)
    }

    /// Build the fixed quote URL.
    pub fn quote_url(&self) -> Result<Url> {
        parse_http_url(&self.quote_url)
    }
}

fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| QuoteImageError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(QuoteImageError::InvalidEndpoint(format!(
            "{}: unsupported scheme {}",
            raw, other
        ))),
    }
}
