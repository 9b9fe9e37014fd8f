//! Quote and image payloads, and the pair that combines them.
//!
//! The quote endpoint answers with a JSON array of records shaped like
//! `{"q": "...", "a": "..."}`; only the first record is kept.
use serde::Deserialize;

use crate::error::QuoteImageError;
use crate::result::Result;

/// A single decoded quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Quote text.
    #[serde(rename = "q")]
    pub text: String,
    /// Author, when the endpoint provides one.
    #[serde(rename = "a", default)]
    pub author: Option<String>,
}

impl Quote {
    /// Creates a quote without an author.
    pub fn new(text: &str) -> Self {
        Quote {
            text: String::from(text),
            author: None,
        }
    }

    /// Decode a quote endpoint body and keep its first entry.
    ///
    /// Returns `DecodeFailed` when the body is not an array of quote records
    /// and `EmptyResult` when the array is empty.
    pub fn from_json_bytes(body: &[u8]) -> Result<Quote> {
        let quotes: Vec<Quote> = serde_json::from_slice(body)?;
        quotes.into_iter().next().ok_or(QuoteImageError::EmptyResult)
    }
}

/// Opaque image payload as received from the image endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBytes(Vec<u8>);

impl ImageBytes {
    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ImageBytes {
    fn from(bytes: Vec<u8>) -> Self {
        ImageBytes(bytes)
    }
}

/// A quote paired with an image. Only built once both halves were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteImage {
    quote: Quote,
    image: ImageBytes,
}

impl QuoteImage {
    /// Pairs a decoded quote with its image.
    pub fn new(quote: Quote, image: ImageBytes) -> Self {
        QuoteImage { quote, image }
    }

    /// The quote half.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// The image half.
    pub fn image(&self) -> &ImageBytes {
        &self.image
    }
}
