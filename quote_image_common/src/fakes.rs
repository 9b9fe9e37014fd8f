//! In-memory sources used by the resolver and batch tests.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::QuoteImageError;
use crate::fetch::{ImageSource, QuoteSource};
use crate::quote::{ImageBytes, Quote};
use crate::result::Result;

/// Serves a fixed image, optionally failing on one specific call.
pub(crate) struct FakeImages {
    pub bytes: Vec<u8>,
    pub fail_on_call: Option<usize>,
    pub stall: Option<(usize, Duration)>,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
}

impl FakeImages {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            fail_on_call: None,
            stall: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Only call number `call` waits for `delay`.
    pub fn stalled_on(mut self, call: usize, delay: Duration) -> Self {
        self.stall = Some((call, delay));
        self
    }
}

#[async_trait]
impl ImageSource for FakeImages {
    async fn fetch_image(&self) -> Result<ImageBytes> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((stalled, delay)) = self.stall {
            if stalled == call {
                tokio::time::sleep(delay).await;
            }
        }
        if self.fail_on_call == Some(call) {
            return Err(QuoteImageError::FetchFailed(format!("image call {} refused", call)));
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(ImageBytes::from(self.bytes.clone()))
    }
}

/// Decodes a fixed quote body on every call.
pub(crate) struct FakeQuotes {
    pub body: Vec<u8>,
    pub delay: Duration,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
}

impl FakeQuotes {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
            fail: false,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl QuoteSource for FakeQuotes {
    async fn fetch_quote(&self) -> Result<Quote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(QuoteImageError::FetchFailed(String::from("quote endpoint down")));
        }
        let quote = Quote::from_json_bytes(&self.body)?;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(quote)
    }
}
