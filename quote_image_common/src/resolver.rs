//! Pair resolver: one image fetch and one quote fetch joined into a `QuoteImage`.
//!
//! Two interchangeable strategies are provided:
//!
//! - `Group` — both fetches run inside one `JoinSet`. The first failure is
//!   returned straight away and the set is told to abort the sibling. Abort is
//!   best-effort: the losing fetch may still be running when the error reaches
//!   the caller.
//! - `Paired` — both fetches are spawned as detached tasks and awaited in
//!   turn. On failure the other task is not cancelled; it may run to
//!   completion and its result is discarded.
//!
//! Either way a `QuoteImage` exists only once both halves succeeded, and both
//! strategies build it from the same inputs.
use std::sync::Arc;

use clap::ValueEnum;
use log::debug;
use strum_macros::{Display, EnumString};
use tokio::task::JoinSet;

use crate::error::QuoteImageError;
use crate::fetch::{HttpFetcher, ImageSource, QuoteSource};
use crate::quote::{ImageBytes, Quote, QuoteImage};
use crate::result::Result;

/// How the two fetches of one pair are run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResolveStrategy {
    /// Shared cancellation scope over both fetches.
    Group,
    /// Two independent tasks, no shared scope.
    Paired,
}

impl Default for ResolveStrategy {
    fn default() -> Self {
        ResolveStrategy::Group
    }
}

/// One finished half of a pair, as yielded by the group scope.
enum Half {
    Image(ImageBytes),
    Quote(Quote),
}

/// Joins one image and one quote fetch into a single `QuoteImage`.
#[derive(Clone)]
pub struct PairResolver {
    images: Arc<dyn ImageSource>,
    quotes: Arc<dyn QuoteSource>,
    strategy: ResolveStrategy,
}

impl PairResolver {
    /// Create a resolver over explicit sources.
    pub fn new(
        images: Arc<dyn ImageSource>,
        quotes: Arc<dyn QuoteSource>,
        strategy: ResolveStrategy,
    ) -> Self {
        Self {
            images,
            quotes,
            strategy,
        }
    }

    /// Create a resolver that fetches both halves over HTTP.
    pub fn with_http(fetcher: HttpFetcher, strategy: ResolveStrategy) -> Self {
        let fetcher = Arc::new(fetcher);
        Self::new(fetcher.clone(), fetcher, strategy)
    }

    /// Strategy used by [`Self::resolve`].
    pub fn strategy(&self) -> ResolveStrategy {
        self.strategy
    }

    /// Fetch both halves concurrently and pair them.
    pub async fn resolve(&self) -> Result<QuoteImage> {
        match self.strategy {
            ResolveStrategy::Group => self.resolve_grouped().await,
            ResolveStrategy::Paired => self.resolve_paired().await,
        }
    }

    async fn resolve_grouped(&self) -> Result<QuoteImage> {
        let mut group: JoinSet<Result<Half>> = JoinSet::new();

        let images = Arc::clone(&self.images);
        group.spawn(async move { images.fetch_image().await.map(Half::Image) });
        let quotes = Arc::clone(&self.quotes);
        group.spawn(async move { quotes.fetch_quote().await.map(Half::Quote) });

        let mut image = None;
        let mut quote = None;
        while let Some(joined) = group.join_next().await {
            match joined.map_err(QuoteImageError::from).and_then(|half| half) {
                Ok(Half::Image(bytes)) => image = Some(bytes),
                Ok(Half::Quote(q)) => quote = Some(q),
                Err(e) => {
                    debug!("Group fetch failed, aborting sibling: {}", e);
                    group.abort_all();
                    return Err(e);
                }
            }
        }

        match (quote, image) {
            (Some(quote), Some(image)) => Ok(QuoteImage::new(quote, image)),
            _ => Err(QuoteImageError::TaskFailed(String::from(
                "fetch group finished without both halves",
            ))),
        }
    }

    async fn resolve_paired(&self) -> Result<QuoteImage> {
        let images = Arc::clone(&self.images);
        let image_task = tokio::spawn(async move { images.fetch_image().await });
        let quotes = Arc::clone(&self.quotes);
        let quote_task = tokio::spawn(async move { quotes.fetch_quote().await });

        // An early return drops the other handle, which detaches the task
        // rather than cancelling it.
        let image = image_task.await??;
        let quote = quote_task.await??;
        Ok(QuoteImage::new(quote, image))
    }
}
