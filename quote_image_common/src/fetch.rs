//! Leaf fetchers: one network request per call, no retries.
//!
//! `ImageSource` and `QuoteSource` are the seams the resolver is written
//! against; `HttpFetcher` implements both over a shared `reqwest::Client`.
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use crate::net::Endpoints;
use crate::quote::{ImageBytes, Quote};
use crate::result::Result;

/// Something that can produce one random image.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch a single image payload.
    async fn fetch_image(&self) -> Result<ImageBytes>;
}

/// Something that can produce one random quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch and decode a single quote.
    async fn fetch_quote(&self) -> Result<Quote>;
}

/// HTTP implementation of both sources.
///
/// The inner client is a cheap shared handle; cloning the fetcher does not
/// open new connection pools.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoints: Endpoints,
}

impl HttpFetcher {
    /// Build a fetcher whose requests time out after `endpoints.timeout`.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder().timeout(endpoints.timeout).build()?;
        Ok(Self { client, endpoints })
    }

    /// Endpoint configuration in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let target = response.url().clone();
        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), target);
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ImageSource for HttpFetcher {
    async fn fetch_image(&self) -> Result<ImageBytes> {
        let url = self.endpoints.random_image_url()?;
        let bytes = self.get_bytes(url).await?;
        Ok(ImageBytes::from(bytes))
    }
}

#[async_trait]
impl QuoteSource for HttpFetcher {
    async fn fetch_quote(&self) -> Result<Quote> {
        let url = self.endpoints.quote_url()?;
        let body = self.get_bytes(url).await?;
        Quote::from_json_bytes(&body)
    }
}
